//! Raw GPIO output line exposed as an `embedded_hal` [`OutputPin`].
//!
//! Lets the generic [`PumpDriver`](super::pump::PumpDriver) drive a pin
//! configured by [`hw_init`](super::hw_init).

use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin};

use super::hw_init::{self, HwInitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineError(pub HwInitError);

impl Error for LineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct GpioLine {
    gpio: i32,
}

impl GpioLine {
    /// The pin must already be configured as an output.
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioLine {
    type Error = LineError;
}

impl OutputPin for GpioLine {
    fn set_low(&mut self) -> Result<(), LineError> {
        hw_init::gpio_write(self.gpio, false).map_err(LineError)
    }

    fn set_high(&mut self) -> Result<(), LineError> {
        hw_init::gpio_write(self.gpio, true).map_err(LineError)
    }
}
