//! Controller configuration.
//!
//! All calibration constants live here as named band structures, one per
//! sensor kind, instead of being baked into the classifiers.  The default
//! value is the reference deployment.  Configuration is fixed at wiring
//! time; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;
use crate::sensors::ph::PhBands;
use crate::sensors::soil_moisture::SoilMoistureBands;
use crate::sensors::water_detection::WaterDetectionBands;
use crate::sensors::water_level::WaterLevelBands;

/// Where the pH level comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhSource {
    /// Sample and classify the pH probe.
    Probe,
    /// Report a constant level without sampling.
    Fixed(Level),
}

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Acquisition ---
    /// Largest legal raw sample after front-end normalisation.
    pub raw_max: u16,

    // --- Thresholds ---
    pub soil_moisture: SoilMoistureBands,
    pub water_level: WaterLevelBands,
    pub water_detection: WaterDetectionBands,
    pub ph: PhBands,
    /// The probe on the reference build reads ~8.6 regardless of the
    /// solution, so the default reports a constant `Ok`.
    pub ph_source: PhSource,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Emit a state report every N control cycles (0 = never).
    pub report_every_ticks: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            raw_max: 1023,

            soil_moisture: SoilMoistureBands::default(),
            water_level: WaterLevelBands::default(),
            water_detection: WaterDetectionBands::default(),
            ph: PhBands::default(),
            ph_source: PhSource::Fixed(Level::Ok),

            control_loop_interval_ms: 1000, // 1 Hz
            report_every_ticks: 10,
        }
    }
}

impl ControllerConfig {
    /// Check every band set is strictly ascending and covers the raw range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.raw_max == 0 {
            return Err(ConfigError::ValidationFailed("raw_max must be non-zero"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be non-zero",
            ));
        }
        if self.ph_source == PhSource::Fixed(Level::Invalid) {
            return Err(ConfigError::ValidationFailed(
                "fixed pH level must not be Invalid",
            ));
        }
        self.soil_moisture.validate(self.raw_max)?;
        self.water_level.validate(self.raw_max)?;
        self.water_detection.validate(self.raw_max)?;
        self.ph.validate()?;
        Ok(())
    }
}
