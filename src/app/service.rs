//! Irrigation controller: the hexagonal core.
//!
//! [`IrrigationController`] owns the hardware behind its port traits and
//! runs one classify → decide → actuate cycle per call.  It keeps no
//! decision history: apart from the pump flag (held by the pump port) it
//! only remembers which rule fired last and which channels are faulted,
//! for diagnostics.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │   IrrigationController    │
//!    PumpPort ◀── │  classify · cascade       │
//!                 └──────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::error::Result;
use crate::sensors::{SensorKind, SensorSnapshot};

use super::commands::AppCommand;
use super::decision::{self, Decision, Rule};
use super::events::{AppEvent, StateSnapshot};
use super::ports::{EventSink, PumpPort, SensorPort};

/// The controller orchestrates all domain logic.
pub struct IrrigationController<H> {
    hw: H,
    last_rule: Option<Rule>,
    /// Per-channel fault latch, indexed by [`SensorKind::index`].
    faulted: [bool; SensorKind::ALL.len()],
    cycles: u64,
}

impl<H: SensorPort + PumpPort> IrrigationController<H> {
    /// Take ownership of the hardware.  The pump driver is expected to
    /// have driven its line low at construction.
    pub fn new(hw: H) -> Self {
        Self {
            hw,
            last_rule: None,
            faulted: [false; SensorKind::ALL.len()],
            cycles: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Ensure the pump is off and announce the controller.
    pub fn start(&mut self, sink: &mut impl EventSink) -> Result<()> {
        self.hw.turn_off()?;
        sink.emit(&AppEvent::Started);
        info!("IrrigationController started, pump off");
        Ok(())
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: read sensors → cascade → pump.
    ///
    /// Returns whether the pump ended up on.  An `Err` means the pump
    /// line could not be driven; the pump flag reads off in that case.
    pub fn decide_and_apply(&mut self, sink: &mut impl EventSink) -> Result<bool> {
        self.cycles += 1;

        let snapshot = self.hw.read_all();
        self.track_faults(&snapshot, sink);

        let decision = decision::evaluate(&snapshot.levels());
        debug!(
            "cycle {} | sm={} ph={} wl={} wd={} -> {} ({})",
            self.cycles,
            snapshot.soil_moisture.level,
            snapshot.ph.level,
            snapshot.water_level.level,
            snapshot.water_detection.level,
            if decision.run { "run" } else { "stop" },
            decision.rule,
        );
        self.last_rule = Some(decision.rule);

        self.apply(decision, sink)
    }

    /// Drive the pump to match `decision`.  Returns whether it is now on.
    pub fn apply(&mut self, decision: Decision, sink: &mut impl EventSink) -> Result<bool> {
        let was_on = self.hw.is_on();
        let result = if decision.run {
            self.hw.turn_on()
        } else {
            self.hw.turn_off()
        };

        let on = self.hw.is_on();
        if on != was_on {
            info!("Pump {} ({})", if on { "ON" } else { "OFF" }, decision.rule);
            sink.emit(&AppEvent::PumpSwitched {
                on,
                rule: decision.rule,
            });
        }

        result?;
        Ok(on)
    }

    /// Turn the pump off regardless of sensor state.
    pub fn force_off(&mut self, sink: &mut impl EventSink) -> Result<()> {
        let result = self.hw.turn_off();
        warn!("Pump forced off");
        sink.emit(&AppEvent::ForcedOff);
        result?;
        Ok(())
    }

    /// Process an external command.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) -> Result<()> {
        match cmd {
            AppCommand::ForcePumpOff => self.force_off(sink),
            AppCommand::RequestReport => {
                let snapshot = self.describe_state();
                sink.emit(&AppEvent::Report(snapshot));
                Ok(())
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Fresh sensor readings plus the pump flag and last rule.
    ///
    /// Samples the sensors but never touches the pump.
    pub fn describe_state(&mut self) -> StateSnapshot {
        StateSnapshot {
            readings: self.hw.read_all(),
            pump_on: self.hw.is_on(),
            last_rule: self.last_rule,
            cycles: self.cycles,
        }
    }

    pub fn is_pump_on(&self) -> bool {
        self.hw.is_on()
    }

    pub fn last_rule(&self) -> Option<Rule> {
        self.last_rule
    }

    /// Decision cycles run since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn hw(&self) -> &H {
        &self.hw
    }

    pub fn hw_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    // ── Internal ──────────────────────────────────────────────

    /// Emit fault / recovery events on the edge only.
    fn track_faults(&mut self, snapshot: &SensorSnapshot, sink: &mut impl EventSink) {
        for reading in snapshot.readings() {
            let idx = reading.kind.index();
            let invalid = reading.level.is_invalid();
            if invalid && !self.faulted[idx] {
                warn!("SENSOR FAULT: {} raw={:?}", reading.kind, reading.raw);
                sink.emit(&AppEvent::SensorFault {
                    sensor: reading.kind,
                    raw: reading.raw,
                });
            } else if !invalid && self.faulted[idx] {
                info!("SENSOR RECOVERED: {} -> {}", reading.kind, reading.level);
                sink.emit(&AppEvent::SensorRecovered {
                    sensor: reading.kind,
                    level: reading.level,
                });
            }
            self.faulted[idx] = invalid;
        }
    }
}
