//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the irrigator: the decision
//! cascade and the controller that runs it against live readings.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod decision;
pub mod events;
pub mod ports;
pub mod service;
