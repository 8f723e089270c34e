//! Elapsed-time checkpoints at fixed distance intervals.
//!
//! Both generators emit one timestamp (whole seconds since the start) per full
//! interval. A trailing partial interval is dropped, so a 10.5 km run with
//! 1 km intervals yields ten checkpoints.

use std::fmt;

use crate::constants::{
    DEFAULT_PACE_DIFF_PERCENT, DEFAULT_SPLIT_PERCENT, MAX_INTERVALS, SECONDS_PER_MINUTE,
};
use crate::errors::PaceError;
use crate::pace::compute_pace;

const SECONDS_PER_MINUTE_F: f64 = SECONDS_PER_MINUTE as f64;

/// Where a negative-split run changes pace and by how much
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    split_percent: u32,
    pace_diff_percent: u32,
}

impl SplitConfig {
    /// `split_percent` must leave some distance for the faster segment, so it
    /// is limited to `0..100`. `pace_diff_percent` is limited to `0..=100`.
    pub fn new(split_percent: u32, pace_diff_percent: u32) -> Result<Self, PaceError> {
        if split_percent >= 100 {
            return Err(PaceError::configuration(format!(
                "split distance must be below 100% (got {}%)",
                split_percent
            )));
        }
        if pace_diff_percent > 100 {
            return Err(PaceError::configuration(format!(
                "pace difference must be at most 100% (got {}%)",
                pace_diff_percent
            )));
        }

        Ok(Self {
            split_percent,
            pace_diff_percent,
        })
    }

    pub fn split_percent(&self) -> u32 {
        self.split_percent
    }

    pub fn pace_diff_percent(&self) -> u32 {
        self.pace_diff_percent
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            split_percent: DEFAULT_SPLIT_PERCENT,
            pace_diff_percent: DEFAULT_PACE_DIFF_PERCENT,
        }
    }
}

/// Pacing strategy used to lay out the checkpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitStrategy {
    #[default]
    Even,
    NegativeSplit(SplitConfig),
}

impl SplitStrategy {
    pub fn timestamps(
        &self,
        distance: f64,
        total_seconds: u64,
        interval: f64,
    ) -> Result<Vec<u64>, PaceError> {
        match self {
            SplitStrategy::Even => generate_even_splits(distance, total_seconds, interval),
            SplitStrategy::NegativeSplit(config) => {
                negative_splits(distance, total_seconds, interval, *config)
            }
        }
    }

    /// Human readable label, e.g. "Negative split strategy (50% distance point, 5% pace difference)"
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitStrategy::Even => f.write_str("Even pace strategy"),
            SplitStrategy::NegativeSplit(config) => write!(
                f,
                "Negative split strategy ({}% distance point, {}% pace difference)",
                config.split_percent, config.pace_diff_percent
            ),
        }
    }
}

/// Number of full intervals that fit in `distance`
fn interval_count(distance: f64, interval: f64) -> Result<usize, PaceError> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(PaceError::validation(format!(
            "interval must be a positive number (got {})",
            interval
        )));
    }

    let count = (distance / interval).floor().max(0.0);
    if !count.is_finite() || count > MAX_INTERVALS as f64 {
        return Err(PaceError::validation(format!(
            "interval {} is too small for a distance of {} (at most {} intervals)",
            interval, distance, MAX_INTERVALS
        )));
    }

    Ok(count as usize)
}

/// Checkpoints for a constant pace over the whole distance
pub fn generate_even_splits(
    distance: f64,
    total_seconds: u64,
    interval: f64,
) -> Result<Vec<u64>, PaceError> {
    let pace = compute_pace(distance, total_seconds)?;
    let count = interval_count(distance, interval)?;

    Ok((1..=count)
        .map(|i| (i as f64 * interval * pace * SECONDS_PER_MINUTE_F).floor() as u64)
        .collect())
}

/// Checkpoints for a run that starts slower than average and finishes faster.
///
/// The first `split_percent` of the distance is run at a slower pace and the
/// rest at a faster one, balanced so the whole distance still takes
/// `total_seconds`.
pub fn generate_negative_splits(
    distance: f64,
    total_seconds: u64,
    interval: f64,
    split_percent: u32,
    pace_diff_percent: u32,
) -> Result<Vec<u64>, PaceError> {
    let config = SplitConfig::new(split_percent, pace_diff_percent)?;
    negative_splits(distance, total_seconds, interval, config)
}

fn negative_splits(
    distance: f64,
    total_seconds: u64,
    interval: f64,
    config: SplitConfig,
) -> Result<Vec<u64>, PaceError> {
    let avg_pace = compute_pace(distance, total_seconds)?;
    let count = interval_count(distance, interval)?;

    let split_point = distance * f64::from(config.split_percent) / 100.0;
    let pace_ratio = f64::from(config.pace_diff_percent) / 100.0;

    // Time gained on the slower segment is paid back on the faster one:
    // split_point * slower + (distance - split_point) * faster == distance * avg
    let adjustment = pace_ratio * split_point / distance;
    let slower_pace = avg_pace * (1.0 + adjustment);
    let faster_pace = avg_pace * (1.0 - adjustment * split_point / (distance - split_point));

    if faster_pace <= 0.0 {
        return Err(PaceError::configuration(format!(
            "{}% pace difference at a {}% split point leaves no time for the faster part",
            config.pace_diff_percent, config.split_percent
        )));
    }

    let mut elapsed = 0.0;
    let mut timestamps = Vec::with_capacity(count);

    for i in 1..=count {
        let interval_end = i as f64 * interval;
        let interval_start = interval_end - interval;

        if interval_end <= split_point {
            elapsed += interval * slower_pace * SECONDS_PER_MINUTE_F;
        } else if interval_start < split_point {
            elapsed += (split_point - interval_start) * slower_pace * SECONDS_PER_MINUTE_F;
            elapsed += (interval_end - split_point) * faster_pace * SECONDS_PER_MINUTE_F;
        } else {
            elapsed += interval * faster_pace * SECONDS_PER_MINUTE_F;
        }

        timestamps.push(elapsed.floor() as u64);
    }

    Ok(timestamps)
}
