//! Outbound application events.
//!
//! The [`IrrigationController`](super::service::IrrigationController) emits
//! these through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them: log to serial, encode
//! into telemetry frames, record in tests.

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::sensors::{SensorKind, SensorSnapshot};

use super::decision::Rule;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The controller has started; the pump is off.
    Started,

    /// The pump changed state as the result of a decision.
    PumpSwitched { on: bool, rule: Rule },

    /// A channel started classifying as `Invalid`.
    SensorFault { sensor: SensorKind, raw: Option<u16> },

    /// A previously faulted channel is back inside its bands.
    SensorRecovered { sensor: SensorKind, level: Level },

    /// Manual override turned the pump off.
    ForcedOff,

    /// Periodic or requested state report.
    Report(StateSnapshot),
}

/// Everything an operator needs to see at a glance: raw samples, their
/// levels, the pump flag and what decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub readings: SensorSnapshot,
    pub pump_on: bool,
    /// Rule that produced the last decision; `None` before the first cycle.
    pub last_rule: Option<Rule>,
    /// Decision cycles run since start.
    pub cycles: u64,
}
