//! BNC pH probe with amplifier board.
//!
//! The amplifier already linearises the logarithmic electrode response, so
//! the raw sample maps straight onto 0.0 – 14.0 before banding.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

use super::{scale, strictly_ascending};

/// Bottom and top of the pH scale the raw range maps onto.
pub const PH_SCALE: (f32, f32) = (0.0, 14.0);

/// Inclusive upper bounds in pH units, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhBands {
    pub too_low: f32,
    pub danger_low: f32,
    pub ok: f32,
    pub danger_high: f32,
    /// Anything above is a sensor fault.
    pub too_high: f32,
}

impl Default for PhBands {
    /// Bands suited to common potted plants.
    fn default() -> Self {
        Self {
            too_low: 5.8,
            danger_low: 6.1,
            ok: 7.0,
            danger_high: 7.5,
            too_high: 14.0,
        }
    }
}

impl PhBands {
    /// Classify a pH value.  NaN never satisfies a bound and lands on
    /// `Invalid`.
    pub fn classify_ph(&self, ph: f32) -> Level {
        if ph <= self.too_low {
            Level::TooLow
        } else if ph <= self.danger_low {
            Level::DangerLow
        } else if ph <= self.ok {
            Level::Ok
        } else if ph <= self.danger_high {
            Level::DangerHigh
        } else if ph <= self.too_high {
            Level::TooHigh
        } else {
            Level::Invalid
        }
    }

    /// Map a raw sample onto the pH scale and classify it.
    pub fn classify(&self, raw: u16, raw_max: u16) -> Level {
        self.classify_ph(to_ph(raw, raw_max))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            self.too_low,
            self.danger_low,
            self.ok,
            self.danger_high,
            self.too_high,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::ValidationFailed("pH thresholds must be finite"));
        }
        if !strictly_ascending(&bounds) {
            return Err(ConfigError::ValidationFailed(
                "pH thresholds must be strictly ascending",
            ));
        }
        if self.too_high < PH_SCALE.1 {
            return Err(ConfigError::ValidationFailed(
                "pH top threshold must cover the pH scale",
            ));
        }
        Ok(())
    }
}

/// Raw sample → pH units.
pub fn to_ph(raw: u16, raw_max: u16) -> f32 {
    scale::map_float(raw, raw_max, PH_SCALE.0, PH_SCALE.1)
}
