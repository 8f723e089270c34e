//! Command line front end.
//!
//! Flags use the single-dash long style (`-distance=10 -time=3600`);
//! [`normalize_args`] rewrites them to `--distance=10` before clap sees them,
//! so both spellings work.

use clap::{ArgAction, Parser};

use crate::constants::{DEFAULT_INTERVAL, DEFAULT_PACE_DIFF_PERCENT, DEFAULT_SPLIT_PERCENT};
use crate::errors::PaceError;
use crate::models::{PaceRequest, PaceResponse};
use crate::plan;
use crate::utils::{format_distance, format_duration, format_pace};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pace", version, about = "Running pace and split time calculator", long_about = None)]
pub struct CliArgs {
    /// Distance in kilometers
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub distance: f64,

    /// Time in seconds
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub time: i64,

    /// Time in HH:MM:SS format (overrides -time)
    #[arg(long = "timeformat")]
    pub time_format: Option<String>,

    /// Preset distance: 5k, 10k, half, marathon (overrides -distance)
    #[arg(long)]
    pub preset: Option<String>,

    /// Interval in kilometers for split times
    #[arg(long, default_value_t = DEFAULT_INTERVAL, allow_negative_numbers = true)]
    pub interval: f64,

    /// Use the negative split strategy
    #[arg(
        long = "negativesplit",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub negative_split: bool,

    /// Negative split: percent of the distance run at the slower pace
    #[arg(long = "splitdistance", default_value_t = i64::from(DEFAULT_SPLIT_PERCENT), allow_negative_numbers = true)]
    pub split_distance: i64,

    /// Negative split: percent pace difference between the two parts
    #[arg(long = "pacedifference", default_value_t = i64::from(DEFAULT_PACE_DIFF_PERCENT), allow_negative_numbers = true)]
    pub pace_difference: i64,
}

impl From<&CliArgs> for PaceRequest {
    fn from(args: &CliArgs) -> Self {
        PaceRequest {
            distance: args.distance,
            time_in_seconds: Some(args.time),
            time_format: args.time_format.clone(),
            preset: args.preset.clone(),
            interval: Some(args.interval),
            negative_split: args.negative_split,
            split_distance: Some(args.split_distance),
            pace_difference: Some(args.pace_difference),
        }
    }
}

/// Rewrite `-flag` / `-flag=value` into `--flag` / `--flag=value`.
///
/// Single-letter switches (`-h`, `-V`) and negative numbers are left alone.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let is_long_flag = arg.len() > 2
                && arg.starts_with('-')
                && !arg.starts_with("--")
                && arg.as_bytes()[1].is_ascii_alphabetic();
            if i > 0 && is_long_flag {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

pub fn usage() -> &'static str {
    "Usage: pace -distance=10.0 -time=3600\n   or: pace -distance=10.0 -timeformat=01:00:00\n   or: pace -preset=10k -timeformat=01:00:00 [-interval=1.0] [-negativesplit -splitdistance=50 -pacedifference=5]"
}

/// Compute the plan for `args` and render the report printed on success
pub fn run(args: &CliArgs) -> Result<String, PaceError> {
    let request = PaceRequest::from(args);
    let response = plan::resolve(&request)?;
    Ok(render(&request, &response))
}

fn render(request: &PaceRequest, response: &PaceResponse) -> String {
    let mut output = String::new();

    if let Some(preset) = request.preset.as_deref().filter(|p| !p.is_empty()) {
        output.push_str(&format!(
            "Using preset distance {}: {:.3} km\n",
            preset, response.distance
        ));
    }
    if let Some(time_format) = request.time_format.as_deref().filter(|t| !t.is_empty()) {
        output.push_str(&format!(
            "Time given: {} ({} seconds)\n",
            time_format, response.time_in_seconds
        ));
    }

    output.push_str(&format!(
        "Pace: {} min {} sec per km ({}/km)\n",
        response.pace_minutes,
        response.pace_seconds,
        format_pace(response.pace_decimal)
    ));
    output.push_str(&format!(
        "Finish time: {}\n",
        format_duration(response.time_in_seconds)
    ));
    output.push_str(&format!("Strategy: {}\n", response.strategy_description));

    output.push_str("\nSplit times:\n");
    if response.intervals.is_empty() {
        output.push_str("(interval is longer than the distance)\n");
    }
    for interval in &response.intervals {
        output.push_str(&format!(
            "{} km: {}\n",
            format_distance(interval.distance),
            interval.time
        ));
    }

    output
}
