//! ANSI protection-function family.

/// Time-delayed phase overcurrent (ANSI 51) settings.
pub mod ansi51;

use std::fmt;
use std::str::FromStr;

pub use ansi51::TimeOvercurrent;

/// Protection functions identified by their ANSI device number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiFunction {
    /// 50: instantaneous phase overcurrent.
    PhaseInstantaneous,
    /// 51: time-delayed phase overcurrent.
    PhaseTimeDelayed,
    /// 50N: instantaneous neutral (earth-fault) overcurrent.
    NeutralInstantaneous,
    /// 51N: time-delayed neutral (earth-fault) overcurrent.
    NeutralTimeDelayed,
}

impl AnsiFunction {
    pub const ALL: [AnsiFunction; 4] = [
        AnsiFunction::PhaseInstantaneous,
        AnsiFunction::PhaseTimeDelayed,
        AnsiFunction::NeutralInstantaneous,
        AnsiFunction::NeutralTimeDelayed,
    ];

    /// ANSI device number, e.g. `"51"` or `"50N"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::PhaseInstantaneous => "50",
            Self::PhaseTimeDelayed => "51",
            Self::NeutralInstantaneous => "50N",
            Self::NeutralTimeDelayed => "51N",
        }
    }

    /// Descriptive function name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PhaseInstantaneous => "Instantaneous Phase Overcurrent",
            Self::PhaseTimeDelayed => "Time Delayed Phase Overcurrent",
            Self::NeutralInstantaneous => "Instantaneous Neutral Overcurrent",
            Self::NeutralTimeDelayed => "Time Delayed Neutral Overcurrent",
        }
    }

    /// Returns `true` for the earth-fault (neutral) functions.
    pub fn is_neutral(self) -> bool {
        matches!(self, Self::NeutralInstantaneous | Self::NeutralTimeDelayed)
    }
}

impl fmt::Display for AnsiFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.name())
    }
}

impl FromStr for AnsiFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("unknown ANSI function code \"{code}\""))
    }
}
