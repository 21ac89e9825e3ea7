//! Fuzz target: sensor classification + decision cascade
//!
//! Feeds four arbitrary raw samples through the default classifiers and
//! the cascade.  Nothing may panic, and a fault on any channel must keep
//! the pump off.
//!
//! cargo fuzz run fuzz_classify

#![no_main]

use irrigator::app::decision::{Rule, evaluate};
use irrigator::level::Levels;
use irrigator::sensors::ph::PhBands;
use irrigator::sensors::soil_moisture::SoilMoistureBands;
use irrigator::sensors::water_detection::WaterDetectionBands;
use irrigator::sensors::water_level::WaterLevelBands;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u16; 5]| {
    let [sm, ph, wl, wd, raw_max] = data;
    let raw_max = raw_max.max(1);

    let levels = Levels::new(
        SoilMoistureBands::default().classify(sm),
        PhBands::default().classify(ph, raw_max),
        WaterLevelBands::default().classify(wl),
        WaterDetectionBands::default().classify(wd),
    );

    let decision = evaluate(&levels);
    assert_eq!(decision.run, decision.rule.runs_pump());
    if levels.any_invalid() {
        assert!(!decision.run, "fault must keep the pump off");
        assert_eq!(decision.rule, Rule::InvalidReading);
    }
});
