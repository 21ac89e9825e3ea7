//! Sensor subsystem: per-channel classifiers and the aggregating [`SensorHub`].
//!
//! Each physical quantity has its own threshold bands (one file per kind).
//! A [`SensorChannel`] pairs those bands with the ADC channel it samples;
//! the hub owns all four channels and produces a [`SensorSnapshot`] per
//! control cycle.

pub mod ph;
pub mod scale;
pub mod soil_moisture;
pub mod water_detection;
pub mod water_level;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::app::ports::AnalogPort;
use crate::config::{ControllerConfig, PhSource};
use crate::error::ConfigError;
use crate::level::{Level, Levels};
use crate::pins;
use ph::PhBands;
use soil_moisture::SoilMoistureBands;
use water_detection::WaterDetectionBands;
use water_level::WaterLevelBands;

/// ADC channel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub u8);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADC1_CH{}", self.0)
    }
}

/// The closed set of physical quantities the controller knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    SoilMoisture,
    Ph,
    WaterLevel,
    WaterDetection,
}

impl SensorKind {
    pub const ALL: [SensorKind; 4] = [
        SensorKind::SoilMoisture,
        SensorKind::Ph,
        SensorKind::WaterLevel,
        SensorKind::WaterDetection,
    ];

    /// Dense index, matching the order of [`SensorKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SoilMoisture => "Soil moisture",
            Self::Ph => "PH",
            Self::WaterLevel => "Water level",
            Self::WaterDetection => "Water detection",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw → [`Level`] mapping for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classifier {
    SoilMoisture(SoilMoistureBands),
    WaterLevel(WaterLevelBands),
    WaterDetection(WaterDetectionBands),
    Ph { bands: PhBands, raw_max: u16 },
    /// Ignores the sample and always yields the given level.  Stands in
    /// for a probe that is installed but known to be broken.
    Fixed(Level),
}

impl Classifier {
    pub fn classify(&self, raw: u16) -> Level {
        match self {
            Self::SoilMoisture(bands) => bands.classify(raw),
            Self::WaterLevel(bands) => bands.classify(raw),
            Self::WaterDetection(bands) => bands.classify(raw),
            Self::Ph { bands, raw_max } => bands.classify(raw, *raw_max),
            Self::Fixed(level) => *level,
        }
    }
}

/// One physical input: what it measures, where it is sampled, and how
/// samples are classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorChannel {
    kind: SensorKind,
    channel: Option<ChannelId>,
    classifier: Classifier,
}

impl SensorChannel {
    pub fn soil_moisture(channel: ChannelId, bands: SoilMoistureBands) -> Self {
        Self {
            kind: SensorKind::SoilMoisture,
            channel: Some(channel),
            classifier: Classifier::SoilMoisture(bands),
        }
    }

    pub fn water_level(channel: ChannelId, bands: WaterLevelBands) -> Self {
        Self {
            kind: SensorKind::WaterLevel,
            channel: Some(channel),
            classifier: Classifier::WaterLevel(bands),
        }
    }

    pub fn water_detection(channel: ChannelId, bands: WaterDetectionBands) -> Self {
        Self {
            kind: SensorKind::WaterDetection,
            channel: Some(channel),
            classifier: Classifier::WaterDetection(bands),
        }
    }

    pub fn ph(channel: ChannelId, bands: PhBands, raw_max: u16) -> Self {
        Self {
            kind: SensorKind::Ph,
            channel: Some(channel),
            classifier: Classifier::Ph { bands, raw_max },
        }
    }

    /// A channel that never samples hardware and always reports `level`.
    pub fn fixed(kind: SensorKind, level: Level) -> Self {
        Self {
            kind,
            channel: None,
            classifier: Classifier::Fixed(level),
        }
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// ADC channel, `None` for fixed channels.
    pub fn channel(&self) -> Option<ChannelId> {
        self.channel
    }

    pub fn classify(&self, raw: u16) -> Level {
        self.classifier.classify(raw)
    }

    /// Sample the channel and classify the result.
    pub fn read(&self, analog: &mut impl AnalogPort) -> SensorReading {
        match self.channel {
            Some(ch) => {
                let raw = analog.read_raw(ch);
                SensorReading {
                    kind: self.kind,
                    raw: Some(raw),
                    level: self.classifier.classify(raw),
                }
            }
            None => SensorReading {
                kind: self.kind,
                raw: None,
                level: self.classifier.classify(0),
            },
        }
    }
}

/// A single classified sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    pub kind: SensorKind,
    /// Raw ADC value; `None` when the channel is fixed and not sampled.
    pub raw: Option<u16>,
    pub level: Level,
}

/// A point-in-time reading of all four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub soil_moisture: SensorReading,
    pub ph: SensorReading,
    pub water_level: SensorReading,
    pub water_detection: SensorReading,
}

impl SensorSnapshot {
    pub fn levels(&self) -> Levels {
        Levels::new(
            self.soil_moisture.level,
            self.ph.level,
            self.water_level.level,
            self.water_detection.level,
        )
    }

    /// Readings in [`SensorKind::ALL`] order.
    pub fn readings(&self) -> [SensorReading; 4] {
        [
            self.soil_moisture,
            self.ph,
            self.water_level,
            self.water_detection,
        ]
    }
}

/// Owns every sensor channel and produces a unified snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorHub {
    soil_moisture: SensorChannel,
    ph: SensorChannel,
    water_level: SensorChannel,
    water_detection: SensorChannel,
}

impl SensorHub {
    pub fn new(
        soil_moisture: SensorChannel,
        ph: SensorChannel,
        water_level: SensorChannel,
        water_detection: SensorChannel,
    ) -> Self {
        Self {
            soil_moisture,
            ph,
            water_level,
            water_detection,
        }
    }

    /// Validate `config` and wire the board's ADC channels from [`pins`].
    pub fn from_config(config: &ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ph = match config.ph_source {
            PhSource::Probe => SensorChannel::ph(pins::PH_ADC, config.ph, config.raw_max),
            PhSource::Fixed(level) => {
                log::warn!("pH probe bypassed, reporting constant {level}");
                SensorChannel::fixed(SensorKind::Ph, level)
            }
        };

        Ok(Self::new(
            SensorChannel::soil_moisture(pins::SOIL_MOISTURE_ADC, config.soil_moisture),
            ph,
            SensorChannel::water_level(pins::WATER_LEVEL_ADC, config.water_level),
            SensorChannel::water_detection(pins::WATER_DETECTION_ADC, config.water_detection),
        ))
    }

    /// Read every channel and return a unified snapshot.
    pub fn read_all(&self, analog: &mut impl AnalogPort) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture: self.soil_moisture.read(analog),
            ph: self.ph.read(analog),
            water_level: self.water_level.read(analog),
            water_detection: self.water_detection.read(analog),
        }
    }

    pub fn channel(&self, kind: SensorKind) -> &SensorChannel {
        match kind {
            SensorKind::SoilMoisture => &self.soil_moisture,
            SensorKind::Ph => &self.ph,
            SensorKind::WaterLevel => &self.water_level,
            SensorKind::WaterDetection => &self.water_detection,
        }
    }
}

pub(crate) fn strictly_ascending<T: PartialOrd>(bounds: &[T]) -> bool {
    bounds.windows(2).all(|w| w[0] < w[1])
}
