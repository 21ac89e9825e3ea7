//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IrrigationController (domain)
//! ```
//!
//! Driven adapters (ADC front end, pump output, event sinks) implement
//! these traits.  The [`IrrigationController`](super::service::IrrigationController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::error::ActuatorError;
use crate::sensors::{ChannelId, SensorSnapshot};

/// Raw sample an analog front end returns when acquisition itself failed.
/// It lies above every band's top threshold, so it classifies as `Invalid`.
pub const RAW_FAULT: u16 = u16::MAX;

// ───────────────────────────────────────────────────────────────
// Analog port (driven adapter: ADC → domain)
// ───────────────────────────────────────────────────────────────

/// Raw analog acquisition.
pub trait AnalogPort {
    /// Sample `channel`.  Returns a value in `0..=raw_max`, or
    /// [`RAW_FAULT`] if the conversion failed.
    fn read_raw(&mut self, channel: ChannelId) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain classified readings.
pub trait SensorPort {
    /// Read and classify every sensor.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Pump port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the one-bit pump actuator.
///
/// Implementations keep the reported flag and the physical line in
/// agreement: when a write fails the flag reads `off`.
pub trait PumpPort {
    fn turn_on(&mut self) -> Result<(), ActuatorError>;

    fn turn_off(&mut self) -> Result<(), ActuatorError>;

    fn is_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, frame
/// encoder, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
