//! Integration tests for the irrigation controller.
//!
//! Drives `IrrigationController` end-to-end through `HardwareAdapter` with
//! simulated ADC samples and a recording pump line.  Raw values are the
//! ones a bench rig with the default bands would produce.

use irrigator::Level;
use irrigator::app::commands::AppCommand;
use irrigator::app::decision::Rule;
use irrigator::app::events::AppEvent;
use irrigator::config::PhSource;
use irrigator::pins;
use irrigator::sensors::SensorKind;

use crate::mock_hw::{RecordingSink, line_high, raw, rig, set_raw};

fn probe() -> PhSource {
    PhSource::Probe
}

// ── Cascade through real classification ───────────────────────

#[test]
fn moist_soil_with_full_reservoir_waters() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();

    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    assert!(line_high(&ctl), "pump line should be driven high");
    assert_eq!(ctl.last_rule(), Some(Rule::StandardRun));
}

#[test]
fn soaking_soil_stops_pump() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_SOAKING, raw::PH_NEUTRAL, raw::RESERVOIR_OK, raw::POT_DRY);

    assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    assert!(!line_high(&ctl));
    assert_eq!(ctl.last_rule(), Some(Rule::NoRuleMatched));
}

#[test]
fn wet_soil_still_waters() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_WET, raw::PH_NEUTRAL, raw::RESERVOIR_OK, raw::POT_DRY);

    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::StandardRun));
}

#[test]
fn empty_reservoir_blocks_bone_dry_soil() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_BONE_DRY, raw::PH_NEUTRAL, raw::RESERVOIR_EMPTY, raw::POT_WET);

    assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::ReservoirEmpty));
    assert!(!line_high(&ctl));
}

#[test]
fn acidic_water_blocks_watering() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_OK, raw::PH_ACIDIC, raw::RESERVOIR_OK, raw::POT_DRY);

    assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::PhOutOfRange));
}

#[test]
fn slightly_acidic_water_is_tolerated() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_OK, raw::PH_SLIGHTLY_ACIDIC, raw::RESERVOIR_OK, raw::POT_DRY);

    assert_eq!(ctl.describe_state().readings.ph.level, Level::DangerLow);
    assert!(ctl.decide_and_apply(&mut sink).unwrap());
}

#[test]
fn bone_dry_soil_overrides_pooled_water() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_BONE_DRY, raw::PH_NEUTRAL, raw::RESERVOIR_OK, raw::POT_WET);

    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::DrySoilOverride));
}

#[test]
fn damp_soil_with_pooled_water_stops() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_DAMP, raw::PH_NEUTRAL, raw::RESERVOIR_OK, raw::POT_WET);

    assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::NoRuleMatched));
}

#[test]
fn low_reservoir_only_waters_bone_dry_soil() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();

    set_raw(&mut ctl, raw::SOIL_OK, raw::PH_NEUTRAL, raw::RESERVOIR_LOW, raw::POT_DRY);
    assert!(!ctl.decide_and_apply(&mut sink).unwrap());

    set_raw(&mut ctl, raw::SOIL_BONE_DRY, raw::PH_NEUTRAL, raw::RESERVOIR_LOW, raw::POT_DRY);
    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::DrySoilOverride));
}

// ── Faults ────────────────────────────────────────────────────

#[test]
fn broken_ph_probe_stops_pump_before_other_rules() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    assert!(ctl.decide_and_apply(&mut sink).unwrap());

    set_raw(&mut ctl, raw::SOIL_OK, raw::PH_BROKEN, raw::RESERVOIR_EMPTY, raw::POT_DRY);
    assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    assert_eq!(ctl.last_rule(), Some(Rule::InvalidReading));
    assert!(!line_high(&ctl));
    assert!(sink.events.contains(&AppEvent::SensorFault {
        sensor: SensorKind::Ph,
        raw: Some(raw::PH_BROKEN),
    }));
}

#[test]
fn disconnected_sensor_reports_fault_once() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    ctl.hw_mut().analog_mut().disconnect(pins::WATER_LEVEL_ADC);

    for _ in 0..3 {
        assert!(!ctl.decide_and_apply(&mut sink).unwrap());
    }
    let faults: Vec<_> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::SensorFault { .. }))
        .collect();
    assert_eq!(faults.len(), 1, "fault should be edge-triggered");
    assert!(matches!(
        faults[0],
        AppEvent::SensorFault {
            sensor: SensorKind::WaterLevel,
            ..
        }
    ));

    ctl.hw_mut().analog_mut().set(pins::WATER_LEVEL_ADC, raw::RESERVOIR_OK);
    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    assert!(sink.events.contains(&AppEvent::SensorRecovered {
        sensor: SensorKind::WaterLevel,
        level: Level::Ok,
    }));
}

#[test]
fn fixed_ph_ignores_probe_channel() {
    let mut ctl = rig(PhSource::Fixed(Level::Ok));
    let mut sink = RecordingSink::default();
    set_raw(&mut ctl, raw::SOIL_OK, raw::PH_BROKEN, raw::RESERVOIR_OK, raw::POT_DRY);

    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    let snap = ctl.describe_state();
    assert_eq!(snap.readings.ph.raw, None);
    assert_eq!(snap.readings.ph.level, Level::Ok);
}

// ── Actuator behaviour ────────────────────────────────────────

#[test]
fn repeated_run_keeps_pump_on_without_new_events() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();

    ctl.decide_and_apply(&mut sink).unwrap();
    ctl.decide_and_apply(&mut sink).unwrap();

    let switches = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::PumpSwitched { .. }))
        .count();
    assert_eq!(switches, 1);
    assert!(ctl.is_pump_on());
    assert!(line_high(&ctl));
}

#[test]
fn pump_starts_low_on_construction() {
    let ctl = rig(probe());
    assert_eq!(ctl.hw().pump().line().writes, vec![false]);
    assert!(!ctl.is_pump_on());
}

#[test]
fn force_off_stops_running_pump() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    ctl.decide_and_apply(&mut sink).unwrap();

    ctl.handle_command(AppCommand::ForcePumpOff, &mut sink).unwrap();
    assert!(!ctl.is_pump_on());
    assert!(!line_high(&ctl));
    assert_eq!(sink.events.last(), Some(&AppEvent::ForcedOff));
}

#[test]
fn force_off_is_idempotent() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();

    ctl.force_off(&mut sink).unwrap();
    ctl.force_off(&mut sink).unwrap();
    assert!(!ctl.is_pump_on());
    assert!(!line_high(&ctl));
}

#[test]
fn next_cycle_resumes_after_force_off() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    ctl.decide_and_apply(&mut sink).unwrap();
    ctl.force_off(&mut sink).unwrap();

    assert!(ctl.decide_and_apply(&mut sink).unwrap());
    assert!(line_high(&ctl));
}

// ── State reporting ───────────────────────────────────────────

#[test]
fn describe_state_reflects_last_cycle() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    ctl.decide_and_apply(&mut sink).unwrap();

    let snap = ctl.describe_state();
    assert!(snap.pump_on);
    assert_eq!(snap.last_rule, Some(Rule::StandardRun));
    assert_eq!(snap.cycles, 1);
    assert_eq!(snap.readings.soil_moisture.raw, Some(raw::SOIL_OK));
    assert_eq!(snap.readings.soil_moisture.level, Level::Ok);
    assert_eq!(snap.readings.water_detection.level, Level::Ok);
}

#[test]
fn describe_state_never_touches_pump() {
    let mut ctl = rig(probe());
    let writes_before = ctl.hw().pump().line().writes.len();

    let snap = ctl.describe_state();
    assert!(!snap.pump_on);
    assert_eq!(ctl.hw().pump().line().writes.len(), writes_before);
    assert_eq!(ctl.cycles(), 0);
}

#[test]
fn report_command_emits_snapshot() {
    let mut ctl = rig(probe());
    let mut sink = RecordingSink::default();
    ctl.start(&mut sink).unwrap();
    ctl.decide_and_apply(&mut sink).unwrap();
    ctl.handle_command(AppCommand::RequestReport, &mut sink).unwrap();

    assert_eq!(sink.events.first(), Some(&AppEvent::Started));
    match sink.events.last() {
        Some(AppEvent::Report(snap)) => {
            assert!(snap.pump_on);
            assert_eq!(snap.last_rule, Some(Rule::StandardRun));
        }
        other => panic!("expected report, got {other:?}"),
    }
}
