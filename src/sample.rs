//! Seeded sample-plan generation for demos and test fixtures.

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{PlanCategory, PlanRecord};

const PLAN_NAMES: [(&str, PlanCategory); 6] = [
    ("Gold PPO", PlanCategory::Ppo),
    ("Silver HMO", PlanCategory::Hmo),
    ("Bronze HDHP", PlanCategory::Hdhp),
    ("Platinum PPO", PlanCategory::Ppo),
    ("Core HMO", PlanCategory::Hmo),
    ("Flex Indemnity", PlanCategory::Other),
];

/// Generate `count` plan records for one organization and year, fully
/// determined by `seed`.
#[must_use]
pub fn sample_plans(organization_id: &str, year: i32, count: usize, seed: u64) -> Vec<PlanRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let created_at = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    (0..count)
        .map(|index| {
            let (name, category) = PLAN_NAMES[index % PLAN_NAMES.len()];
            let employer_premium = round_cents(rng.random_range(350.0..1400.0));
            let employee_premium = round_cents(rng.random_range(50.0..450.0));
            let deductible = f64::from(rng.random_range(1u32..=10) * 500);
            PlanRecord {
                id: format!("plan-{}", index + 1),
                organization_id: organization_id.to_string(),
                year,
                plan_name: name.to_string(),
                plan_category: category,
                employee_count: rng.random_range(5..400),
                employer_premium,
                employee_premium,
                deductible,
                out_of_pocket_max: deductible * rng.random_range(2.0..4.0),
                created_at,
            }
        })
        .collect()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
