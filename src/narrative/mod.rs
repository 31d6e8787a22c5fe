//! Narrative insight generation at the external-collaborator seam.
//!
//! The numeric projection never depends on this module. An [`InsightSource`]
//! is whatever produces free-form text for a scenario (upstream this is a
//! hosted language-model API); when it fails or is absent, the caller
//! substitutes a deterministic fallback sentence built from the same inputs
//! instead of surfacing the failure.

use crate::core::errors::{BiqError, Result};
use crate::model::Adjustment;

/// Inputs handed to an insight source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRequest {
    /// Display name of the scenario being explained.
    pub scenario_name: String,
    /// Rounded baseline total.
    pub baseline_cost: i64,
    /// Rounded projected total.
    pub projected_cost: i64,
    /// Human-readable adjustment descriptions, see [`describe`].
    pub adjustments: Vec<String>,
}

/// Producer of scenario narratives.
pub trait InsightSource {
    /// Generate free-form narrative text for `request`.
    fn generate(&self, request: &InsightRequest) -> Result<String>;
}

/// Insight source for builds without any external service wired in. Always
/// fails, which routes every caller through the deterministic fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredInsight;

impl InsightSource for UnconfiguredInsight {
    fn generate(&self, _request: &InsightRequest) -> Result<String> {
        Err(BiqError::Narrative {
            details: "no insight service configured".to_string(),
        })
    }
}

/// Human-readable description of one adjustment, e.g. `premium change by 10%`.
#[must_use]
pub fn describe(adjustment: &Adjustment) -> String {
    format!(
        "{} by {}%",
        adjustment.kind.label(),
        format_magnitude(adjustment.magnitude * 100.0)
    )
}

/// Deterministic fallback sentence: direction of the cost move plus a
/// comma-joined driver list. A projection equal to baseline reads as a
/// decrease (strict comparison, kept stable for snapshot consumers).
#[must_use]
pub fn fallback_insight(request: &InsightRequest) -> String {
    let direction = if request.projected_cost > request.baseline_cost {
        "an increase"
    } else {
        "a decrease"
    };
    format!(
        "This scenario for {} projects {direction} in total costs. Key drivers include: {}.",
        request.scenario_name,
        request.adjustments.join(", ")
    )
}

/// Degrade-don't-propagate policy: the source's text when it succeeds, the
/// deterministic fallback when it fails.
#[must_use]
pub fn insight_or_fallback(source: &dyn InsightSource, request: &InsightRequest) -> String {
    source
        .generate(request)
        .unwrap_or_else(|_| fallback_insight(request))
}

/// Trim float noise from percentage magnitudes: whole percents print without
/// a fraction, everything else with one decimal place.
fn format_magnitude(percent: f64) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{}", rounded.trunc())
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::{
        InsightRequest, InsightSource, UnconfiguredInsight, describe, fallback_insight,
        insight_or_fallback,
    };
    use crate::core::errors::{BiqError, Result};
    use crate::model::{Adjustment, AdjustmentKind};

    fn request() -> InsightRequest {
        InsightRequest {
            scenario_name: "FY25 renewal".to_string(),
            baseline_cost: 12_000,
            projected_cost: 13_200,
            adjustments: vec!["premium change by 10%".to_string()],
        }
    }

    #[test]
    fn describe_trims_float_noise() {
        assert_eq!(
            describe(&Adjustment::new(AdjustmentKind::PremiumChange, 0.1)),
            "premium change by 10%"
        );
        assert_eq!(
            describe(&Adjustment::new(AdjustmentKind::DeductibleChange, -0.2)),
            "deductible change by -20%"
        );
        assert_eq!(
            describe(&Adjustment::new(AdjustmentKind::EnrollmentShift, 0.125)),
            "enrollment shift by 12.5%"
        );
    }

    #[test]
    fn fallback_reports_direction_and_drivers() {
        assert_eq!(
            fallback_insight(&request()),
            "This scenario for FY25 renewal projects an increase in total costs. \
             Key drivers include: premium change by 10%."
        );

        let mut decreasing = request();
        decreasing.projected_cost = 10_800;
        assert!(fallback_insight(&decreasing).contains("projects a decrease"));
    }

    #[test]
    fn equal_costs_read_as_decrease() {
        let mut flat = request();
        flat.projected_cost = flat.baseline_cost;
        assert!(fallback_insight(&flat).contains("projects a decrease"));
    }

    #[test]
    fn failing_source_degrades_to_fallback() {
        let text = insight_or_fallback(&UnconfiguredInsight, &request());
        assert!(text.starts_with("This scenario for FY25 renewal"));
    }

    #[test]
    fn successful_source_text_passes_through() {
        struct Canned;
        impl InsightSource for Canned {
            fn generate(&self, _request: &InsightRequest) -> Result<String> {
                Ok("analyst narrative".to_string())
            }
        }
        assert_eq!(insight_or_fallback(&Canned, &request()), "analyst narrative");

        struct Failing;
        impl InsightSource for Failing {
            fn generate(&self, _request: &InsightRequest) -> Result<String> {
                Err(BiqError::Narrative {
                    details: "upstream timeout".to_string(),
                })
            }
        }
        assert!(insight_or_fallback(&Failing, &request()).contains("Key drivers include"));
    }
}
