//! Deterministic scenario calculation: folds baseline plans and an
//! adjustment chain into aggregate projected costs.
//!
//! The engine is a total function: no I/O, no validation, no clamping, no
//! error path. Every adjustment applies to every plan (target plan ids are
//! accepted but never consulted, see [`crate::model::Adjustment`]), and the
//! combined effect per plan is the product of the per-adjustment multipliers.

pub mod memo;

use crate::model::{Adjustment, AdjustmentKind, PlanRecord, ScenarioResults};

/// Premium impact per unit of deductible change: a deductible increase is
/// modeled as a premium decrease at one-fifth the rate. Heuristic business
/// constant, reproduced literally.
const DEDUCTIBLE_PREMIUM_FACTOR: f64 = -0.2;

/// Per-adjustment premium multiplier.
///
/// `premium_change` with magnitude `v` yields `1 + v`; `deductible_change`
/// yields `1 + v * -0.2`; any other kind yields `1` (no effect).
#[must_use]
pub fn multiplier(adjustment: &Adjustment) -> f64 {
    match adjustment.kind {
        AdjustmentKind::PremiumChange => 1.0 + adjustment.magnitude,
        AdjustmentKind::DeductibleChange => {
            1.0 + adjustment.magnitude * DEDUCTIBLE_PREMIUM_FACTOR
        }
        AdjustmentKind::EnrollmentShift => 1.0,
    }
}

/// Project scenario costs in a single pass over `plans`.
///
/// Baseline totals are always recomputed fresh from the unadjusted premiums;
/// the adjustment chain is applied to each plan's employer and employee
/// premium independently before aggregating, weighted by employee count.
/// Empty `plans` yields the all-zero result; empty `adjustments` is the
/// identity transform (delta exactly zero).
#[must_use]
pub fn project(plans: &[PlanRecord], adjustments: &[Adjustment]) -> ScenarioResults {
    let mut baseline_total = 0.0_f64;
    let mut employer_total = 0.0_f64;
    let mut employee_total = 0.0_f64;

    for plan in plans {
        let headcount = f64::from(plan.employee_count);
        baseline_total += (plan.employer_premium + plan.employee_premium) * headcount;

        let mut employer_premium = plan.employer_premium;
        let mut employee_premium = plan.employee_premium;
        for adjustment in adjustments {
            let factor = multiplier(adjustment);
            employer_premium *= factor;
            employee_premium *= factor;
        }

        employer_total += employer_premium * headcount;
        employee_total += employee_premium * headcount;
    }

    let projected_total = employer_total + employee_total;
    ScenarioResults {
        projected_total_cost: round_cost(projected_total),
        projected_employer_cost: round_cost(employer_total),
        projected_employee_cost: round_cost(employee_total),
        delta_from_baseline: round_cost(projected_total - baseline_total),
    }
}

/// Round to the nearest whole currency unit, half away from zero.
#[allow(clippy::cast_possible_truncation)] // totals are far below i64 range for any real book of plans
fn round_cost(value: f64) -> i64 {
    value.round() as i64
}
