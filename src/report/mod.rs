//! Display formatting for scenario output.
//!
//! Pure string/value builders only; terminal coloring lives in the CLI
//! layer so the library stays usable without the `cli` feature.

use crate::model::{Scenario, ScenarioResults};

/// Format a whole-dollar amount as USD with thousands separators, e.g.
/// `$13,200` or `-$1,200`.
#[must_use]
pub fn format_currency(value: i64) -> String {
    let magnitude = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-${magnitude}")
    } else {
        format!("${magnitude}")
    }
}

/// Format a fraction as a signed percentage with one decimal place, e.g.
/// `0.1` becomes `+10.0%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:+.1}%", value * 100.0)
}

/// Delta relative to a baseline as a percent string; `n/a` when the
/// baseline is zero and the ratio is undefined.
#[must_use]
pub fn format_delta_percent(results: &ScenarioResults) -> String {
    let baseline = results.projected_total_cost - results.delta_from_baseline;
    if baseline == 0 {
        return "n/a".to_string();
    }
    #[allow(clippy::cast_precision_loss)] // display only
    format_percent(results.delta_from_baseline as f64 / baseline as f64)
}

/// Structured JSON payload for `--json` output.
#[must_use]
pub fn json_payload(command: &str, scenario: &Scenario, insight: Option<&str>) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "command": command,
        "scenario": scenario,
    });
    if let Some(text) = insight {
        payload["insight"] = serde_json::Value::String(text.to_string());
    }
    payload
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
