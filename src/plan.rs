//! Turns a [`PaceRequest`] into a [`PaceResponse`].
//!
//! Both front ends go through [`resolve`], so presets, time formats and
//! defaults behave the same on the command line and over HTTP.

use tracing::debug;

use crate::constants::{
    Preset, DEFAULT_INTERVAL, DEFAULT_PACE_DIFF_PERCENT, DEFAULT_SPLIT_PERCENT,
};
use crate::errors::PaceError;
use crate::models::{IntervalData, PaceRequest, PaceResponse};
use crate::pace::{compute_pace, PaceBreakdown};
use crate::splits::{SplitConfig, SplitStrategy};
use crate::utils::{format_duration, parse_duration};

pub const INVALID_INPUT_MESSAGE: &str = "Please provide valid distance and time values";

/// Distance after applying the preset, if any
pub fn resolve_distance(request: &PaceRequest) -> Result<f64, PaceError> {
    match non_empty(&request.preset) {
        Some(name) => Ok(name.parse::<Preset>()?.distance()),
        None => Ok(request.distance),
    }
}

/// Total seconds after applying the time format, if any
pub fn resolve_time(request: &PaceRequest) -> Result<i64, PaceError> {
    match non_empty(&request.time_format) {
        Some(text) => Ok(parse_duration(text)? as i64),
        None => Ok(request.time_in_seconds.unwrap_or(0)),
    }
}

/// Interval in distance units; absent or zero means the default
pub fn resolve_interval(request: &PaceRequest) -> Result<f64, PaceError> {
    match request.interval {
        None => Ok(DEFAULT_INTERVAL),
        Some(interval) if interval == 0.0 => Ok(DEFAULT_INTERVAL),
        Some(interval) if interval.is_finite() && interval > 0.0 => Ok(interval),
        Some(interval) => Err(PaceError::validation(format!(
            "interval must be a positive number (got {})",
            interval
        ))),
    }
}

/// Pacing strategy requested; split percentages that are absent or zero take the defaults
pub fn resolve_strategy(request: &PaceRequest) -> Result<SplitStrategy, PaceError> {
    if !request.negative_split {
        return Ok(SplitStrategy::Even);
    }

    let split_percent =
        percent_or_default(request.split_distance, DEFAULT_SPLIT_PERCENT, "split distance")?;
    let pace_diff_percent = percent_or_default(
        request.pace_difference,
        DEFAULT_PACE_DIFF_PERCENT,
        "pace difference",
    )?;

    Ok(SplitStrategy::NegativeSplit(SplitConfig::new(
        split_percent,
        pace_diff_percent,
    )?))
}

/// Validate the request and compute pace and checkpoints
pub fn resolve(request: &PaceRequest) -> Result<PaceResponse, PaceError> {
    let distance = resolve_distance(request)?;
    let time_in_seconds = resolve_time(request)?;

    if !(distance.is_finite() && distance > 0.0) || time_in_seconds <= 0 {
        return Err(PaceError::validation(INVALID_INPUT_MESSAGE));
    }
    let time_in_seconds = time_in_seconds as u64;

    let interval = resolve_interval(request)?;
    let strategy = resolve_strategy(request)?;

    let pace = compute_pace(distance, time_in_seconds)?;
    let breakdown = PaceBreakdown::from_pace(pace);
    let timestamps = strategy.timestamps(distance, time_in_seconds, interval)?;

    debug!(
        distance,
        time_in_seconds,
        interval,
        strategy = %strategy,
        checkpoints = timestamps.len(),
        "resolved pace plan"
    );

    let intervals = timestamps
        .into_iter()
        .enumerate()
        .map(|(i, seconds)| IntervalData {
            distance: interval * (i + 1) as f64,
            time: format_duration(seconds),
        })
        .collect();

    Ok(PaceResponse {
        distance,
        time_in_seconds,
        pace_minutes: breakdown.minutes,
        pace_seconds: breakdown.seconds,
        pace_decimal: pace,
        strategy_description: strategy.description(),
        intervals,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn percent_or_default(value: Option<i64>, default: u32, name: &str) -> Result<u32, PaceError> {
    match value {
        None | Some(0) => Ok(default),
        Some(percent) => u32::try_from(percent).map_err(|_| {
            PaceError::validation(format!("{} must be between 0 and 100 (got {})", name, percent))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(distance: f64, seconds: i64) -> PaceRequest {
        PaceRequest {
            distance,
            time_in_seconds: Some(seconds),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_even_pace() {
        let response = resolve(&request(10.0, 3600)).unwrap();

        assert_eq!(response.distance, 10.0);
        assert_eq!(response.time_in_seconds, 3600);
        assert_eq!(response.pace_minutes, 6);
        assert_eq!(response.pace_seconds, 0);
        assert_eq!(response.pace_decimal, 6.0);
        assert_eq!(response.strategy_description, "Even pace strategy");
        assert_eq!(response.intervals.len(), 10);
        assert_eq!(
            response.intervals[0],
            IntervalData {
                distance: 1.0,
                time: "00:06:00".to_string()
            }
        );
        assert_eq!(response.intervals[9].time, "01:00:00");
    }

    #[test]
    fn test_preset_overrides_distance() {
        let response = resolve(&PaceRequest {
            distance: 3.0,
            preset: Some("10k".to_string()),
            time_in_seconds: Some(3000),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(response.distance, 10.0);
        assert_eq!(response.pace_minutes, 5);
    }

    #[test]
    fn test_unknown_preset() {
        let result = resolve(&PaceRequest {
            preset: Some("20k".to_string()),
            time_in_seconds: Some(3000),
            ..Default::default()
        });
        assert_eq!(result, Err(PaceError::UnknownPreset("20k".to_string())));
    }

    #[test]
    fn test_empty_preset_and_format_are_ignored() {
        let response = resolve(&PaceRequest {
            preset: Some(String::new()),
            time_format: Some(String::new()),
            ..request(5.0, 1500)
        })
        .unwrap();

        assert_eq!(response.distance, 5.0);
        assert_eq!(response.time_in_seconds, 1500);
    }

    #[test]
    fn test_time_format_overrides_seconds() {
        let response = resolve(&PaceRequest {
            time_format: Some("00:50:00".to_string()),
            ..request(10.0, 9999)
        })
        .unwrap();

        assert_eq!(response.time_in_seconds, 3000);
    }

    #[test]
    fn test_invalid_time_format() {
        let result = resolve(&PaceRequest {
            time_format: Some("1:2:3".to_string()),
            ..request(10.0, 3600)
        });
        assert!(matches!(result, Err(PaceError::Format(_))));
    }

    #[test]
    fn test_non_positive_inputs() {
        let expected = Err(PaceError::validation(INVALID_INPUT_MESSAGE));

        assert_eq!(resolve(&request(0.0, 3600)), expected);
        assert_eq!(resolve(&request(-5.0, 3600)), expected);
        assert_eq!(resolve(&request(10.0, 0)), expected);
        assert_eq!(resolve(&request(10.0, -60)), expected);
        assert_eq!(resolve(&request(f64::NAN, 3600)), expected);
        assert_eq!(resolve(&PaceRequest::default()), expected);
    }

    #[test]
    fn test_interval_defaults_and_validation() {
        assert_eq!(resolve_interval(&request(10.0, 3600)).unwrap(), 1.0);
        assert_eq!(
            resolve_interval(&PaceRequest {
                interval: Some(0.0),
                ..Default::default()
            })
            .unwrap(),
            1.0
        );
        assert_eq!(
            resolve_interval(&PaceRequest {
                interval: Some(2.5),
                ..Default::default()
            })
            .unwrap(),
            2.5
        );
        assert!(matches!(
            resolve_interval(&PaceRequest {
                interval: Some(-1.0),
                ..Default::default()
            }),
            Err(PaceError::Validation(_))
        ));
    }

    #[test]
    fn test_custom_interval_drops_partial() {
        let response = resolve(&PaceRequest {
            interval: Some(3.0),
            ..request(10.0, 3600)
        })
        .unwrap();

        let distances: Vec<f64> = response.intervals.iter().map(|i| i.distance).collect();
        let times: Vec<&str> = response.intervals.iter().map(|i| i.time.as_str()).collect();
        assert_eq!(distances, vec![3.0, 6.0, 9.0]);
        assert_eq!(times, vec!["00:18:00", "00:36:00", "00:54:00"]);
    }

    #[test]
    fn test_negative_split_defaults() {
        let response = resolve(&PaceRequest {
            negative_split: true,
            ..request(10.0, 3600)
        })
        .unwrap();

        assert_eq!(
            response.strategy_description,
            "Negative split strategy (50% distance point, 5% pace difference)"
        );
        assert_eq!(response.intervals.len(), 10);
        assert_eq!(response.intervals[9].time, "01:00:00");
    }

    #[test]
    fn test_negative_split_custom() {
        let response = resolve(&PaceRequest {
            negative_split: true,
            split_distance: Some(50),
            pace_difference: Some(50),
            interval: Some(3.0),
            ..request(10.0, 3600)
        })
        .unwrap();

        let times: Vec<&str> = response.intervals.iter().map(|i| i.time.as_str()).collect();
        assert_eq!(times, vec!["00:22:30", "00:42:00", "00:55:30"]);
        assert_eq!(
            response.strategy_description,
            "Negative split strategy (50% distance point, 50% pace difference)"
        );
    }

    #[test]
    fn test_split_parameters_ignored_for_even_pace() {
        let response = resolve(&PaceRequest {
            split_distance: Some(100),
            ..request(10.0, 3600)
        })
        .unwrap();
        assert_eq!(response.strategy_description, "Even pace strategy");
    }

    #[test]
    fn test_bad_split_parameters() {
        let full_split = resolve(&PaceRequest {
            negative_split: true,
            split_distance: Some(100),
            ..request(10.0, 3600)
        });
        assert!(matches!(full_split, Err(PaceError::Configuration(_))));

        let negative_split_point = resolve(&PaceRequest {
            negative_split: true,
            split_distance: Some(-10),
            ..request(10.0, 3600)
        });
        assert!(matches!(negative_split_point, Err(PaceError::Validation(_))));

        let huge_difference = resolve(&PaceRequest {
            negative_split: true,
            pace_difference: Some(250),
            ..request(10.0, 3600)
        });
        assert!(matches!(huge_difference, Err(PaceError::Configuration(_))));
    }
}
