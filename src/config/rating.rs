//! Rating system configuration

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCALE: f64 = 400.0;
pub const DEFAULT_K_FACTOR: f64 = 128.0;
pub const DEFAULT_INITIAL_RATING: f64 = 1500.0;

/// Parameters shared by every match of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Performance rating scale (T): the rating gap at which the stronger side
    /// is ten times as likely to win
    pub scale: f64,
    /// Rating change magnitude (K)
    pub k_factor: f64,
    /// Rating every rostered player starts from (E)
    pub initial_rating: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            k_factor: DEFAULT_K_FACTOR,
            initial_rating: DEFAULT_INITIAL_RATING,
        }
    }
}

impl RatingConfig {
    pub fn new(scale: f64, k_factor: f64, initial_rating: f64) -> Self {
        Self {
            scale,
            k_factor,
            initial_rating,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("Scale must be positive, got {}", self.scale),
            }
            .into());
        }

        if !self.k_factor.is_finite() || self.k_factor < 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("K-factor must be non-negative, got {}", self.k_factor),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: format!("Initial rating must be finite, got {}", self.initial_rating),
            }
            .into());
        }

        Ok(())
    }
}
