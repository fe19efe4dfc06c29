//! Configuration management for the rating tool
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, InputSettings, OutputSettings, ServiceSettings};
pub use rating::RatingConfig;
