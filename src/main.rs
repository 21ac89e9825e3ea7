//! Irrigator Firmware: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter (AdcFrontEnd + SensorHub + PumpDriver)  │
//! │  LogEventSink                                            │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │       IrrigationController (pure logic)            │  │
//! │  │       classify · decision cascade                  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::{error, info};

use irrigator::adapters::hardware::{AdcFrontEnd, HardwareAdapter};
use irrigator::adapters::log_sink::LogEventSink;
use irrigator::app::commands::AppCommand;
use irrigator::app::service::IrrigationController;
use irrigator::config::ControllerConfig;
use irrigator::drivers::gpio_line::GpioLine;
use irrigator::drivers::hw_init;
use irrigator::drivers::pump::PumpDriver;
use irrigator::pins;
use irrigator::sensors::SensorHub;
use irrigator::shared::SharedController;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Irrigator v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals()?;

    // ── 3. Wiring ─────────────────────────────────────────────
    let config = ControllerConfig::default();
    let hub = SensorHub::from_config(&config)?;
    let pump = PumpDriver::new(GpioLine::new(pins::PUMP_GPIO))?;
    let hw = HardwareAdapter::new(AdcFrontEnd::new(config.raw_max), hub, pump);

    let mut sink = LogEventSink::new(config.raw_max);
    let mut controller = IrrigationController::new(hw);
    controller.start(&mut sink)?;

    // Loop and overrides share the controller through one critical section.
    let controller = SharedController::new(controller);

    info!("System ready. Entering control loop.");

    // ── 4. Control loop ───────────────────────────────────────
    let interval = Duration::from_millis(u64::from(config.control_loop_interval_ms));
    let mut tick: u64 = 0;

    loop {
        tick += 1;

        if let Err(e) = controller.decide_and_apply(&mut sink) {
            error!("Control cycle failed: {e}, forcing pump off");
            if let Err(e) = controller.force_off(&mut sink) {
                error!("Forced pump off failed: {e}");
            }
        }

        let every = u64::from(config.report_every_ticks);
        if every > 0 && tick % every == 0 {
            if let Err(e) = controller.handle_command(AppCommand::RequestReport, &mut sink) {
                error!("Report failed: {e}");
            }
        }

        std::thread::sleep(interval);
    }
}
