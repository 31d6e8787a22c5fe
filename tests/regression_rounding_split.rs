//! Pins the rounding-boundary behavior of the engine: each output field is
//! rounded independently, and deltas round the difference of unrounded
//! totals. Callers depend on these exact behaviors; they are not bugs.

use benefits_iq_engine::{
    Adjustment, AdjustmentKind, PlanCategory, PlanRecord, project,
};
use chrono::{TimeZone, Utc};

fn plan(id: &str, employee_count: u32, employer_premium: f64, employee_premium: f64) -> PlanRecord {
    PlanRecord {
        id: id.to_string(),
        organization_id: "org-1".to_string(),
        year: 2025,
        plan_name: format!("Plan {id}"),
        plan_category: PlanCategory::Hdhp,
        employee_count,
        employer_premium,
        employee_premium,
        deductible: 3000.0,
        out_of_pocket_max: 6500.0,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn concatenated_and_split_books_may_differ_by_one_unit() {
    // Both halves project onto a .5 boundary: computed separately they each
    // round up; concatenated, the sum rounds once.
    let left = vec![plan("a", 1, 0.25, 0.25)];
    let right = vec![plan("b", 1, 0.25, 0.25)];
    let mut combined = left.clone();
    combined.extend(right.clone());

    let whole = project(&combined, &[]);
    let split_total = project(&left, &[]).projected_total_cost
        + project(&right, &[]).projected_total_cost;

    assert_eq!(whole.projected_total_cost, 1);
    assert_eq!(split_total, 2);
    assert!((whole.projected_total_cost - split_total).abs() <= 1);
}

#[test]
fn total_is_not_rederived_from_rounded_parts() {
    let results = project(&[plan("a", 1, 0.5, 0.5)], &[]);
    assert_eq!(results.projected_employer_cost, 1);
    assert_eq!(results.projected_employee_cost, 1);
    assert_eq!(results.projected_total_cost, 1);
}

#[test]
fn delta_rounds_the_unrounded_difference() {
    let results = project(
        &[plan("a", 1, 5.3, 5.3)],
        &[Adjustment::new(AdjustmentKind::PremiumChange, 0.06)],
    );
    // projected 11.236, baseline 10.6: delta rounds 0.636 to 1 even though
    // the independently rounded totals are both 11.
    assert_eq!(results.projected_total_cost, 11);
    assert_eq!(results.delta_from_baseline, 1);
}

#[test]
fn rounding_is_half_away_from_zero() {
    let positive = project(&[plan("a", 1, 1.25, 1.25)], &[]);
    assert_eq!(positive.projected_total_cost, 3); // 2.5 rounds away from zero

    let negative = project(
        &[plan("a", 1, 1.25, 1.25)],
        &[Adjustment::new(AdjustmentKind::PremiumChange, -2.0)],
    );
    assert_eq!(negative.projected_total_cost, -3); // -2.5 rounds away from zero
}
