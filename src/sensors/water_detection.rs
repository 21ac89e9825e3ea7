//! Water detection pad at the bottom of the pot.
//!
//! Two levels only: `Ok` (dry, no water pooling) and `TooHigh` (water
//! present).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

/// Inclusive upper bounds, ascending in raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterDetectionBands {
    /// At or below: no water detected.
    pub off: u16,
    /// At or below: water detected.  Anything above is a sensor fault.
    pub on: u16,
}

impl Default for WaterDetectionBands {
    fn default() -> Self {
        Self { off: 50, on: 1024 }
    }
}

impl WaterDetectionBands {
    /// Levels this channel can report besides `Invalid`.
    pub const LEVELS: [Level; 2] = [Level::Ok, Level::TooHigh];

    pub fn classify(&self, raw: u16) -> Level {
        if raw <= self.off {
            Level::Ok
        } else if raw <= self.on {
            Level::TooHigh
        } else {
            Level::Invalid
        }
    }

    pub fn validate(&self, raw_max: u16) -> Result<(), ConfigError> {
        if self.off >= self.on {
            return Err(ConfigError::ValidationFailed(
                "water detection thresholds must be strictly ascending",
            ));
        }
        if self.on < raw_max {
            return Err(ConfigError::ValidationFailed(
                "water detection top threshold must cover the raw range",
            ));
        }
        Ok(())
    }
}
