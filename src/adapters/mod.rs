//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements            | Connects to              |
//! |-------------|-----------------------|--------------------------|
//! | `hardware`  | SensorPort, PumpPort  | ADC1 one-shot, pump GPIO |
//! |             | AnalogPort            |                          |
//! | `log_sink`  | EventSink             | Serial log output        |
//! | `sim`       | AnalogPort            | Injected samples (host)  |

pub mod hardware;
pub mod log_sink;
pub mod sim;
