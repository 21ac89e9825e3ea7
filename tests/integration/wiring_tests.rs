//! Integration tests for configuration, wiring and state output.

use irrigator::adapters::hardware::HardwareAdapter;
use irrigator::adapters::log_sink::{LogEventSink, render_snapshot};
use irrigator::adapters::sim::SimAnalog;
use irrigator::app::service::IrrigationController;
use irrigator::config::{ControllerConfig, PhSource};
use irrigator::drivers::pump::PumpDriver;
use irrigator::error::{ActuatorError, ConfigError, Error};
use irrigator::sensors::SensorHub;
use irrigator::shared::SharedController;
use irrigator::telemetry;
use irrigator::{Level, pins};

use crate::mock_hw::{FaultyLine, RecordingSink, raw, rig, set_raw};

// ── Configuration ─────────────────────────────────────────────

#[test]
fn hub_rejects_unordered_bands() {
    let mut config = ControllerConfig::default();
    config.soil_moisture.ok = config.soil_moisture.dangerously_wet;
    assert!(matches!(
        SensorHub::from_config(&config),
        Err(ConfigError::ValidationFailed(_))
    ));
}

#[test]
fn hub_rejects_invalid_fixed_ph() {
    let config = ControllerConfig {
        ph_source: PhSource::Fixed(Level::Invalid),
        ..ControllerConfig::default()
    };
    assert!(SensorHub::from_config(&config).is_err());
}

#[test]
fn config_loads_from_json() {
    let json = serde_json::to_string(&ControllerConfig {
        ph_source: PhSource::Probe,
        report_every_ticks: 0,
        ..ControllerConfig::default()
    })
    .unwrap();
    let config: ControllerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config.ph_source, PhSource::Probe);
    assert!(SensorHub::from_config(&config).is_ok());
}

// ── Actuator faults ───────────────────────────────────────────

#[test]
fn dead_pump_line_surfaces_error() {
    let hub = SensorHub::from_config(&ControllerConfig::default()).unwrap();
    let pump = PumpDriver::new(FaultyLine::default()).unwrap();
    let mut adc = SimAnalog::new();
    adc.set(pins::SOIL_MOISTURE_ADC, raw::SOIL_OK);
    adc.set(pins::WATER_LEVEL_ADC, raw::RESERVOIR_OK);
    adc.set(pins::WATER_DETECTION_ADC, raw::POT_DRY);
    let mut ctl = IrrigationController::new(HardwareAdapter::new(adc, hub, pump));
    let mut sink = RecordingSink::default();

    let err = ctl.decide_and_apply(&mut sink).unwrap_err();
    assert_eq!(err, Error::Actuator(ActuatorError::LineWriteFailed));
    assert!(!ctl.is_pump_on(), "flag must not claim the pump runs");
    assert!(!ctl.hw().pump().line().high);

    // Forcing off still works on a line that only fails high.
    assert!(ctl.force_off(&mut sink).is_ok());
}

// ── State output ──────────────────────────────────────────────

#[test]
fn report_line_lists_every_channel() {
    let mut ctl = rig(PhSource::Probe);
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_OK, raw::PH_NEUTRAL, raw::RESERVOIR_OK, raw::POT_DRY);
    ctl.decide_and_apply(&mut sink).unwrap();

    let mut line = String::new();
    render_snapshot(&mut line, &ctl.describe_state(), 1023).unwrap();
    assert!(line.starts_with("Soil moisture: raw=500"));
    assert!(line.contains("PH: raw=475"));
    assert!(line.contains("Water level: raw=800"));
    assert!(line.contains("Water detection: raw=10"));
    assert!(line.ends_with("Pump is: On (standard run)"));
}

#[test]
fn report_line_flags_faulted_channel() {
    let mut ctl = rig(PhSource::Fixed(Level::Ok));
    ctl.hw_mut().analog_mut().disconnect(pins::SOIL_MOISTURE_ADC);

    let mut line = String::new();
    render_snapshot(&mut line, &ctl.describe_state(), 1023).unwrap();
    assert!(line.contains("Soil moisture: raw=65535 state=INVALID_STATE"));
    assert!(line.contains("PH: raw=n/a state=OK"));
    assert!(line.ends_with("Pump is: Off"));
}

#[test]
fn controller_snapshot_survives_telemetry_frame() {
    let mut ctl = rig(PhSource::Probe);
    let mut sink = RecordingSink::default();
    ctl.decide_and_apply(&mut sink).unwrap();
    let snap = ctl.describe_state();

    let frame = telemetry::encode_frame(&snap).unwrap();
    assert_eq!(telemetry::decode_frame(&frame).unwrap(), snap);

    let json = telemetry::to_json_line(&snap).unwrap();
    assert!(json.contains("\"StandardRun\""));
}

// ── Shared access ─────────────────────────────────────────────

#[test]
fn shared_controller_with_log_sink() {
    let ctl = SharedController::new(rig(PhSource::Probe));
    let mut sink = LogEventSink::new(1023);

    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    ctl.with(|c| {
        set_raw(c, raw::SOIL_OK, raw::PH_NEUTRAL, raw::RESERVOIR_EMPTY, raw::POT_DRY);
    });
    assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    assert!(!ctl.describe_state().pump_on);
}
