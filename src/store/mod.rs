//! Plan and adjustment loading from JSON files.
//!
//! The engine consumes plain slices; this module owns the caller-side
//! contract from the upstream data layer: plans are filtered to one
//! organization and ordered by year descending before they are handed to
//! the engine as the baseline.

use std::path::Path;

use crate::core::errors::{BiqError, Result};
use crate::model::{Adjustment, PlanRecord};

/// Load plan records from a JSON array file.
pub fn load_plans(path: &Path) -> Result<Vec<PlanRecord>> {
    let raw = std::fs::read_to_string(path).map_err(|source| BiqError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|error| BiqError::PlanData {
        path: path.to_path_buf(),
        details: error.to_string(),
    })
}

/// Load an adjustment list from a JSON array file.
pub fn load_adjustments(path: &Path) -> Result<Vec<Adjustment>> {
    let raw = std::fs::read_to_string(path).map_err(|source| BiqError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|error| BiqError::PlanData {
        path: path.to_path_buf(),
        details: error.to_string(),
    })
}

/// Restrict `plans` to one organization (when given) and order by year
/// descending. Ordering is irrelevant to the engine's arithmetic but defines
/// what "baseline" means to the caller.
#[must_use]
pub fn baseline_view(mut plans: Vec<PlanRecord>, organization: Option<&str>) -> Vec<PlanRecord> {
    if let Some(org) = organization {
        plans.retain(|plan| plan.organization_id == org);
    }
    plans.sort_by(|left, right| right.year.cmp(&left.year));
    plans
}
