//! Watering decision cascade.
//!
//! Maps the four classified levels onto a single run/stop decision.
//! Rules are evaluated strictly in order and the first match wins:
//!
//! | # | Rule               | Condition                                         | Pump |
//! |---|--------------------|---------------------------------------------------|------|
//! | 1 | `InvalidReading`   | any level is `Invalid`                            | off  |
//! | 2 | `ReservoirEmpty`   | water level `TooLow`                              | off  |
//! | 3 | `PhOutOfRange`     | pH `TooLow` or `TooHigh`                          | off  |
//! | 4 | `StandardRun`      | pot bottom dry, reservoir `Ok`/`TooHigh`, soil not soaking | on |
//! | 5 | `DrySoilOverride`  | pot bottom `Ok`/`TooHigh`, soil `TooLow`          | on   |
//! | 6 | `NoRuleMatched`    | otherwise                                         | off  |
//!
//! Rule 3 only rejects the two extreme pH bands; `DangerLow` and
//! `DangerHigh` are acceptable.  Guards 1–3 are checked before any
//! ordinal comparison, so `Invalid` never reaches a range check.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::level::{Level, Levels};

/// The cascade step that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    InvalidReading,
    ReservoirEmpty,
    PhOutOfRange,
    StandardRun,
    DrySoilOverride,
    NoRuleMatched,
}

impl Rule {
    pub const fn runs_pump(self) -> bool {
        matches!(self, Self::StandardRun | Self::DrySoilOverride)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidReading => "invalid reading",
            Self::ReservoirEmpty => "reservoir empty",
            Self::PhOutOfRange => "pH out of range",
            Self::StandardRun => "standard run",
            Self::DrySoilOverride => "dry soil override",
            Self::NoRuleMatched => "no rule matched",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one cascade evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub run: bool,
    pub rule: Rule,
}

impl From<Rule> for Decision {
    fn from(rule: Rule) -> Self {
        Self {
            run: rule.runs_pump(),
            rule,
        }
    }
}

/// Run the cascade and report which rule decided.
pub fn evaluate(levels: &Levels) -> Decision {
    let Levels {
        soil_moisture: sm,
        ph,
        water_level: wl,
        water_detection: wd,
    } = *levels;

    if levels.any_invalid() {
        return Rule::InvalidReading.into();
    }
    if wl == Level::TooLow {
        return Rule::ReservoirEmpty.into();
    }
    if ph == Level::TooLow || ph == Level::TooHigh {
        return Rule::PhOutOfRange.into();
    }

    if wd == Level::Ok
        && matches!(wl, Level::Ok | Level::TooHigh)
        && sm.at_most(Level::DangerHigh) {
        return Rule::StandardRun.into();
    }

    // Bone-dry topsoil waters even with water pooling at the bottom.
    if (wd == Level::Ok || wd == Level::TooHigh) && sm == Level::TooLow {
        return Rule::DrySoilOverride.into();
    }

    Rule::NoRuleMatched.into()
}

/// `true` if the pump should run.
pub fn decide(sm: Level, ph: Level, wl: Level, wd: Level) -> bool {
    evaluate(&Levels::new(sm, ph, wl, wd)).run
}
