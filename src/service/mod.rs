//! Service layer for the rating tool
//!
//! This module ties loading, processing and reporting into a single run.

pub mod app;

pub use app::{emit_report, rate_matches, run, RunReport};
