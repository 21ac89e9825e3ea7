//! Interrupt-safe access to the controller.
//!
//! When a manual override (button ISR, shutdown hook) must reach the pump
//! while the control loop runs, both go through [`SharedController`].  Every
//! access happens inside a critical section, so the pump flag and the
//! physical line are never observed out of step.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::app::commands::AppCommand;
use crate::app::events::StateSnapshot;
use crate::app::ports::{EventSink, PumpPort, SensorPort};
use crate::app::service::IrrigationController;
use crate::error::Result;

pub struct SharedController<H> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<IrrigationController<H>>>,
}

impl<H: SensorPort + PumpPort> SharedController<H> {
    pub fn new(controller: IrrigationController<H>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    pub fn decide_and_apply(&self, sink: &mut impl EventSink) -> Result<bool> {
        self.inner.lock(|c| c.borrow_mut().decide_and_apply(sink))
    }

    pub fn force_off(&self, sink: &mut impl EventSink) -> Result<()> {
        self.inner.lock(|c| c.borrow_mut().force_off(sink))
    }

    pub fn describe_state(&self) -> StateSnapshot {
        self.inner.lock(|c| c.borrow_mut().describe_state())
    }

    pub fn handle_command(&self, cmd: AppCommand, sink: &mut impl EventSink) -> Result<()> {
        self.inner.lock(|c| c.borrow_mut().handle_command(cmd, sink))
    }

    pub fn is_pump_on(&self) -> bool {
        self.inner.lock(|c| c.borrow().is_pump_on())
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut IrrigationController<H>) -> R) -> R {
        self.inner.lock(|c| f(&mut c.borrow_mut()))
    }
}
