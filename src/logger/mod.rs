//! JSONL append-only run logging with graceful degradation.

pub mod jsonl;

pub use jsonl::{JsonlLogger, LogLevel};
