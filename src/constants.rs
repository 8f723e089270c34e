use std::fmt;
use std::str::FromStr;

use crate::errors::PaceError;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;

pub const FIVE_K: f64 = 5.0;
pub const TEN_K: f64 = 10.0;
pub const HALF_MARATHON: f64 = 21.0975;
pub const MARATHON: f64 = 42.195;

/// Checkpoint spacing used when the caller does not supply one
pub const DEFAULT_INTERVAL: f64 = 1.0;
/// Negative split: percentage of the distance run at the slower pace
pub const DEFAULT_SPLIT_PERCENT: u32 = 50;
/// Negative split: how much slower the first segment is, in percent
pub const DEFAULT_PACE_DIFF_PERCENT: u32 = 5;

/// Upper bound on checkpoints per request, e.g. a marathon at 5 m intervals
pub const MAX_INTERVALS: usize = 10_000;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Well-known race distances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    FiveK,
    TenK,
    Half,
    Marathon,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::FiveK, Preset::TenK, Preset::Half, Preset::Marathon];

    pub fn distance(self) -> f64 {
        match self {
            Preset::FiveK => FIVE_K,
            Preset::TenK => TEN_K,
            Preset::Half => HALF_MARATHON,
            Preset::Marathon => MARATHON,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::FiveK => "5k",
            Preset::TenK => "10k",
            Preset::Half => "half",
            Preset::Marathon => "marathon",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PaceError;

    /// Preset names are matched case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == lower)
            .ok_or_else(|| PaceError::UnknownPreset(s.to_string()))
    }
}
