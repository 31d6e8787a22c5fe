//! Benefits IQ scenario engine.
//!
//! Deterministic projection of employer/employee benefit costs under a
//! chain of percentage adjustments, plus the thin layers a CLI needs
//! around it: JSON plan loading, JSONL run logging, narrative fallback,
//! and display formatting. The engine itself ([`engine::project`]) is a
//! pure, total function; everything fallible lives at the edges.

pub mod core;
pub mod engine;
pub mod logger;
pub mod model;
pub mod narrative;
pub mod report;
pub mod sample;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli_app;


pub use crate::core::errors::{BiqError, Result};
pub use crate::engine::memo::ScenarioMemo;
pub use crate::engine::project;
pub use crate::model::{
    Adjustment, AdjustmentKind, PlanCategory, PlanRecord, Scenario, ScenarioResults,
};
