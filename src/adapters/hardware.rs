//! Hardware adapter: bridges peripherals to domain port traits.
//!
//! Owns the analog front end, the [`SensorHub`] and the pump driver,
//! exposing them through [`SensorPort`] and [`PumpPort`].  On host targets
//! the front end is usually [`SimAnalog`](super::sim::SimAnalog) and the
//! pump line a test double.

use embedded_hal::digital::OutputPin;

use crate::app::ports::{AnalogPort, PumpPort, RAW_FAULT, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::pump::PumpDriver;
use crate::error::ActuatorError;
use crate::pins;
use crate::sensors::scale::map_range;
use crate::sensors::{ChannelId, SensorHub, SensorSnapshot};

// ── ADC front end ─────────────────────────────────────────────

/// ADC1 one-shot front end.  Rescales native 12-bit samples onto
/// `0..=raw_max` so the reference thresholds apply unchanged.
pub struct AdcFrontEnd {
    raw_max: u16,
}

impl AdcFrontEnd {
    pub fn new(raw_max: u16) -> Self {
        Self { raw_max }
    }
}

impl AnalogPort for AdcFrontEnd {
    fn read_raw(&mut self, channel: ChannelId) -> u16 {
        match hw_init::adc1_read(channel) {
            Some(native) => {
                let scaled = map_range(native, pins::ADC_NATIVE_MAX, 0, i32::from(self.raw_max));
                u16::try_from(scaled).unwrap_or(RAW_FAULT)
            }
            None => RAW_FAULT,
        }
    }
}

// ── HardwareAdapter ───────────────────────────────────────────

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<A, P> {
    analog: A,
    hub: SensorHub,
    pump: PumpDriver<P>,
}

impl<A: AnalogPort, P: OutputPin> HardwareAdapter<A, P> {
    pub fn new(analog: A, hub: SensorHub, pump: PumpDriver<P>) -> Self {
        Self { analog, hub, pump }
    }

    pub fn analog_mut(&mut self) -> &mut A {
        &mut self.analog
    }

    pub fn hub(&self) -> &SensorHub {
        &self.hub
    }

    pub fn pump(&self) -> &PumpDriver<P> {
        &self.pump
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<A: AnalogPort, P: OutputPin> SensorPort for HardwareAdapter<A, P> {
    fn read_all(&mut self) -> SensorSnapshot {
        self.hub.read_all(&mut self.analog)
    }
}

// ── PumpPort implementation ───────────────────────────────────

impl<A: AnalogPort, P: OutputPin> PumpPort for HardwareAdapter<A, P> {
    fn turn_on(&mut self) -> Result<(), ActuatorError> {
        self.pump.turn_on()
    }

    fn turn_off(&mut self) -> Result<(), ActuatorError> {
        self.pump.turn_off()
    }

    fn is_on(&self) -> bool {
        self.pump.is_on()
    }
}
