//! Domain types shared by the engine, store, narrative, and CLI layers.
//!
//! Serde shapes match the upstream JSON wire format: snake_case fields,
//! uppercase plan-category strings, and `type`/`value` names on adjustments.

#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Benefit plan category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanCategory {
    #[serde(rename = "HMO")]
    Hmo,
    #[serde(rename = "PPO")]
    Ppo,
    #[serde(rename = "HDHP")]
    Hdhp,
    Other,
}

impl PlanCategory {
    /// Wire/display name for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hmo => "HMO",
            Self::Ppo => "PPO",
            Self::Hdhp => "HDHP",
            Self::Other => "Other",
        }
    }
}

/// One benefit plan's per-employee cost structure for one year of one
/// organization.
///
/// Premiums are per-employee, per-period amounts. The engine assumes the
/// non-negativity invariants hold on input and performs no validation;
/// callers that break them get distorted but finite output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
    pub organization_id: String,
    pub year: i32,
    pub plan_name: String,
    #[serde(rename = "plan_type")]
    pub plan_category: PlanCategory,
    pub employee_count: u32,
    pub employer_premium: f64,
    pub employee_premium: f64,
    pub deductible: f64,
    pub out_of_pocket_max: f64,
    pub created_at: DateTime<Utc>,
}

/// Kind of proposed change. Only the first two affect projected costs;
/// `EnrollmentShift` is accepted on the wire but has no defined multiplier
/// and is a documented no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    PremiumChange,
    DeductibleChange,
    EnrollmentShift,
}

impl AdjustmentKind {
    /// Wire name, e.g. `premium_change`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PremiumChange => "premium_change",
            Self::DeductibleChange => "deductible_change",
            Self::EnrollmentShift => "enrollment_shift",
        }
    }

    /// Human-readable label, e.g. `premium change`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PremiumChange => "premium change",
            Self::DeductibleChange => "deductible change",
            Self::EnrollmentShift => "enrollment shift",
        }
    }
}

/// One proposed change, applied uniformly across every supplied plan.
///
/// `magnitude` is a signed fraction (`0.10` means +10%). No clamping is
/// performed anywhere; magnitudes that drive premiums negative propagate
/// into a negative projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,
    #[serde(rename = "value")]
    pub magnitude: f64,
    /// Declared in the wire format but never consulted by the computation:
    /// every adjustment applies to every plan regardless of this field.
    /// Preserved as-is for output compatibility; probable latent defect in
    /// the upstream model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_plan_id: Option<String>,
}

impl Adjustment {
    /// Untargeted adjustment.
    #[must_use]
    pub const fn new(kind: AdjustmentKind, magnitude: f64) -> Self {
        Self {
            kind,
            magnitude,
            target_plan_id: None,
        }
    }

    /// Adjustment carrying a target plan id (accepted, not honored).
    #[must_use]
    pub fn with_target(kind: AdjustmentKind, magnitude: f64, target_plan_id: impl Into<String>) -> Self {
        Self {
            kind,
            magnitude,
            target_plan_id: Some(target_plan_id.into()),
        }
    }
}

/// Aggregate projection for one scenario.
///
/// Each field is rounded to the nearest whole currency unit independently,
/// half away from zero. `projected_total_cost` is rounded from the unrounded
/// employer+employee sum, never re-derived from the rounded parts, so
/// `projected_employer_cost + projected_employee_cost` may miss it by ±1 in
/// edge cases. `delta_from_baseline` rounds the difference of the unrounded
/// projected and baseline totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResults {
    pub projected_total_cost: i64,
    pub projected_employer_cost: i64,
    pub projected_employee_cost: i64,
    pub delta_from_baseline: i64,
}

impl ScenarioResults {
    /// All-zero result, returned for an empty baseline.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            projected_total_cost: 0,
            projected_employer_cost: 0,
            projected_employee_cost: 0,
            delta_from_baseline: 0,
        }
    }
}

/// A named, timestamped bundle of adjustments and their computed results.
/// A plain value for display and session logging, not a persistent entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub adjustments: Vec<Adjustment>,
    pub results: ScenarioResults,
    pub created_at: DateTime<Utc>,
}
