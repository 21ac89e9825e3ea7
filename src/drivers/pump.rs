//! Water pump driver (logic-level MOSFET on a single GPIO).
//!
//! One output line, one flag.  The line is driven low at construction so
//! the pump is off from the first instant the driver exists.
//!
//! ## Safety contract
//!
//! The flag only reads `on` after the line was successfully driven high.
//! If a write fails the driver makes a best-effort attempt to drive the
//! line low and reports `off`.  A failure of that fallback is logged; the
//! line state is then unknown.  The decision cascade lives elsewhere; this
//! driver is a dumb actuator.

use embedded_hal::digital::OutputPin;
use log::error;

use crate::app::ports::PumpPort;
use crate::error::ActuatorError;

pub struct PumpDriver<P> {
    line: P,
    on: bool,
}

impl<P: OutputPin> PumpDriver<P> {
    /// Take the output line and drive it low.
    pub fn new(mut line: P) -> Result<Self, ActuatorError> {
        line.set_low().map_err(|e| {
            error!("pump: initial drive low failed: {e:?}");
            ActuatorError::LineWriteFailed
        })?;
        Ok(Self { line, on: false })
    }

    pub fn turn_on(&mut self) -> Result<(), ActuatorError> {
        if let Err(e) = self.line.set_high() {
            error!("pump: drive high failed: {e:?}");
            self.on = false;
            if let Err(e) = self.line.set_low() {
                error!("pump: fallback drive low failed, line state unknown: {e:?}");
            }
            return Err(ActuatorError::LineWriteFailed);
        }
        self.on = true;
        Ok(())
    }

    /// The flag is reset to off even when the write fails; after an `Err`
    /// the physical line state is unknown.
    pub fn turn_off(&mut self) -> Result<(), ActuatorError> {
        self.on = false;
        self.line.set_low().map_err(|e| {
            error!("pump: drive low failed: {e:?}");
            ActuatorError::LineWriteFailed
        })
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The owned output line.
    pub fn line(&self) -> &P {
        &self.line
    }
}

impl<P: OutputPin> PumpPort for PumpDriver<P> {
    fn turn_on(&mut self) -> Result<(), ActuatorError> {
        PumpDriver::turn_on(self)
    }

    fn turn_off(&mut self) -> Result<(), ActuatorError> {
        PumpDriver::turn_off(self)
    }

    fn is_on(&self) -> bool {
        PumpDriver::is_on(self)
    }
}
