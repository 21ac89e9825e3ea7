//! Qualitative sensor levels.
//!
//! Every channel classifies its raw sample into a [`Level`].  The five
//! ordered levels form a band from `TooLow` to `TooHigh`; `Invalid` sits
//! outside that band and is deliberately **not** `PartialOrd`: range
//! checks go through [`Level::within`], which never admits `Invalid`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative state of one sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    TooLow = 0,
    DangerLow = 1,
    Ok = 2,
    DangerHigh = 3,
    TooHigh = 4,
    /// Sample fell outside every declared band (sensor fault).
    Invalid = u8::MAX,
}

impl Level {
    /// The five ordered levels, ascending.
    pub const ORDERED: [Level; 5] = [
        Level::TooLow,
        Level::DangerLow,
        Level::Ok,
        Level::DangerHigh,
        Level::TooHigh,
    ];

    /// Position in the ordered band, or `None` for [`Level::Invalid`].
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            Self::Invalid => None,
            other => Some(other as u8),
        }
    }

    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Inclusive ordinal range check.  Always `false` if any of the three
    /// operands is `Invalid`.
    pub const fn within(self, low: Level, high: Level) -> bool {
        match (self.ordinal(), low.ordinal(), high.ordinal()) {
            (Some(v), Some(lo), Some(hi)) => lo <= v && v <= hi,
            _ => false,
        }
    }

    /// `TooLow..=high`, excluding `Invalid`.
    pub const fn at_most(self, high: Level) -> bool {
        self.within(Level::TooLow, high)
    }

    /// Diagnostic name as shown on the serial console.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooLow => "TOO_LOW",
            Self::DangerLow => "DANGER_LOW",
            Self::Ok => "OK",
            Self::DangerHigh => "DANGER_HIGH",
            Self::TooHigh => "TOO_HIGH",
            Self::Invalid => "INVALID_STATE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four classified inputs of the decision cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levels {
    pub soil_moisture: Level,
    pub ph: Level,
    pub water_level: Level,
    pub water_detection: Level,
}

impl Levels {
    pub const fn new(soil_moisture: Level, ph: Level, water_level: Level, water_detection: Level) -> Self {
        Self {
            soil_moisture,
            ph,
            water_level,
            water_detection,
        }
    }

    /// True if any input is `Invalid`.
    pub const fn any_invalid(&self) -> bool {
        self.soil_moisture.is_invalid()
            || self.ph.is_invalid()
            || self.water_level.is_invalid()
            || self.water_detection.is_invalid()
    }
}
