//! Capacitive soil moisture probe.
//!
//! The probe reads **inverted**: a low raw value means wet soil, a high raw
//! value means dry soil.  It uses the full five-level band, so `TooHigh`
//! is "soaking wet" and `TooLow` is "bone dry".

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

use super::strictly_ascending;

/// Inclusive upper bounds of each band, ascending in raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilMoistureBands {
    /// Soaking wet soil or stagnant water.
    pub too_wet: u16,
    /// Soil well saturated with water.
    pub dangerously_wet: u16,
    /// Ideal saturation.
    pub ok: u16,
    /// Damp, on the verge of drying out.
    pub dangerously_dry: u16,
    /// Bone dry.  Anything above is a sensor fault.
    pub too_dry: u16,
}

impl Default for SoilMoistureBands {
    fn default() -> Self {
        Self {
            too_wet: 350,
            dangerously_wet: 450,
            ok: 550,
            dangerously_dry: 650,
            too_dry: 1023,
        }
    }
}

impl SoilMoistureBands {
    pub fn classify(&self, raw: u16) -> Level {
        if raw <= self.too_wet {
            Level::TooHigh
        } else if raw <= self.dangerously_wet {
            Level::DangerHigh
        } else if raw <= self.ok {
            Level::Ok
        } else if raw <= self.dangerously_dry {
            Level::DangerLow
        } else if raw <= self.too_dry {
            Level::TooLow
        } else {
            Level::Invalid
        }
    }

    pub fn validate(&self, raw_max: u16) -> Result<(), ConfigError> {
        let bounds = [
            self.too_wet,
            self.dangerously_wet,
            self.ok,
            self.dangerously_dry,
            self.too_dry,
        ];
        if !strictly_ascending(&bounds) {
            return Err(ConfigError::ValidationFailed(
                "soil moisture thresholds must be strictly ascending",
            ));
        }
        if self.too_dry < raw_max {
            return Err(ConfigError::ValidationFailed(
                "soil moisture top threshold must cover the raw range",
            ));
        }
        Ok(())
    }
}
