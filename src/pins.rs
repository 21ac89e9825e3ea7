//! GPIO / ADC assignments for the irrigator board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! ADC channels are ADC1 channel numbers on the ESP32-S3 (channel N sits on
//! GPIO N+1).

use crate::sensors::ChannelId;

// ---------------------------------------------------------------------------
// Sensors: analog (ADC1)
// ---------------------------------------------------------------------------

/// Capacitive soil moisture probe (GPIO 1).
pub const SOIL_MOISTURE_ADC: ChannelId = ChannelId(0);
/// BNC pH probe through its amplifier board (GPIO 2).
/// Unused while the pH source is fixed in configuration.
pub const PH_ADC: ChannelId = ChannelId(1);
/// Capacitive reservoir water level strip (GPIO 3).
pub const WATER_LEVEL_ADC: ChannelId = ChannelId(2);
/// Water detection pad at the pot bottom (GPIO 6).
pub const WATER_DETECTION_ADC: ChannelId = ChannelId(5);

/// All ADC1 channels configured at boot.
pub const ADC_CHANNELS: [ChannelId; 4] = [
    SOIL_MOISTURE_ADC,
    PH_ADC,
    WATER_LEVEL_ADC,
    WATER_DETECTION_ADC,
];

/// ADC sample width on the ESP32-S3 (12-bit → 0 – 4095).
pub const ADC_NATIVE_MAX: u16 = 4095;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Digital output to the pump MOSFET gate: HIGH = pump running.
pub const PUMP_GPIO: i32 = 15;

