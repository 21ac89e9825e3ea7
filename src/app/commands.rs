//! Inbound commands to the controller.
//!
//! These represent actions requested by the outside world (serial console,
//! shutdown path) that the
//! [`IrrigationController`](super::service::IrrigationController)
//! interprets and acts upon.

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Turn the pump off regardless of sensor state.
    ForcePumpOff,

    /// Read all sensors and emit a [`Report`](super::events::AppEvent::Report).
    RequestReport,
}
