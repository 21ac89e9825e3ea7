//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  Snapshots are rendered as a
//! single text line per report; a channel in fault shows `INVALID_STATE`
//! so an operator can go and check the probe.

use core::fmt::{self, Write};

use heapless::String;
use log::{info, warn};

use crate::app::events::{AppEvent, StateSnapshot};
use crate::app::ports::EventSink;
use crate::sensors::SensorReading;
use crate::sensors::scale::percent;

/// Line buffer for one rendered report.
const LINE_CAP: usize = 256;

/// Render one channel: label, raw value and level name.
pub fn render_reading(out: &mut impl Write, reading: &SensorReading, raw_max: u16) -> fmt::Result {
    match reading.raw {
        Some(raw) if !reading.level.is_invalid() => write!(
            out,
            "{}: raw={} ({}%) state={}",
            reading.kind,
            raw,
            percent(raw, raw_max),
            reading.level
        ),
        Some(raw) => write!(out, "{}: raw={} state={}", reading.kind, raw, reading.level),
        None => write!(out, "{}: raw=n/a state={}", reading.kind, reading.level),
    }
}

/// Render a full snapshot on one line.
pub fn render_snapshot(out: &mut impl Write, snap: &StateSnapshot, raw_max: u16) -> fmt::Result {
    for reading in snap.readings.readings() {
        render_reading(out, &reading, raw_max)?;
        out.write_str(" | ")?;
    }
    write!(out, "Pump is: {}", if snap.pump_on { "On" } else { "Off" })?;
    if let Some(rule) = snap.last_rule {
        write!(out, " ({rule})")?;
    }
    Ok(())
}

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink {
    raw_max: u16,
}

impl LogEventSink {
    pub fn new(raw_max: u16) -> Self {
        Self { raw_max }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | pump off"),
            AppEvent::PumpSwitched { on, rule } => {
                info!("PUMP  | {} ({})", if *on { "ON" } else { "OFF" }, rule);
            }
            AppEvent::SensorFault { sensor, raw } => {
                warn!("FAULT | {} raw={:?} state=INVALID_STATE", sensor, raw);
            }
            AppEvent::SensorRecovered { sensor, level } => {
                info!("FAULT | {} recovered, state={}", sensor, level);
            }
            AppEvent::ForcedOff => warn!("PUMP  | forced OFF"),
            AppEvent::Report(snap) => {
                let mut line: String<LINE_CAP> = String::new();
                if render_snapshot(&mut line, snap, self.raw_max).is_err() {
                    warn!("REPORT| line truncated");
                }
                info!("REPORT| {}", line);
            }
        }
    }
}
