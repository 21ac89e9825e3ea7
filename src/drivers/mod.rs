//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod gpio_line;
pub mod hw_init;
pub mod pump;
