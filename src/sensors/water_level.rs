//! Capacitive reservoir water level strip.
//!
//! Restricted to three levels: `TooLow` (empty), `DangerLow` (running low)
//! and `Ok`.  It never reports `DangerHigh` or `TooHigh`; a full
//! reservoir is simply `Ok`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

use super::strictly_ascending;

/// Inclusive upper bounds, ascending in raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterLevelBands {
    /// No water, or barely any, left in the reservoir.
    pub dry: u16,
    /// Reservoir running low.
    pub danger_low: u16,
    /// Enough water.  Anything above is a sensor fault.
    pub ok: u16,
}

impl Default for WaterLevelBands {
    fn default() -> Self {
        Self {
            dry: 200,
            danger_low: 450,
            ok: 1024,
        }
    }
}

impl WaterLevelBands {
    /// Levels this channel can report besides `Invalid`.
    pub const LEVELS: [Level; 3] = [Level::TooLow, Level::DangerLow, Level::Ok];

    pub fn classify(&self, raw: u16) -> Level {
        if raw <= self.dry {
            Level::TooLow
        } else if raw <= self.danger_low {
            Level::DangerLow
        } else if raw <= self.ok {
            Level::Ok
        } else {
            Level::Invalid
        }
    }

    pub fn validate(&self, raw_max: u16) -> Result<(), ConfigError> {
        if !strictly_ascending(&[self.dry, self.danger_low, self.ok]) {
            return Err(ConfigError::ValidationFailed(
                "water level thresholds must be strictly ascending",
            ));
        }
        if self.ok < raw_max {
            return Err(ConfigError::ValidationFailed(
                "water level top threshold must cover the raw range",
            ));
        }
        Ok(())
    }
}
