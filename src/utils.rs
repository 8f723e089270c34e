use chrono::{NaiveTime, Timelike};

use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::PaceError;
use crate::pace::PaceBreakdown;

/// Parse a clock-style "HH:MM:SS" string (00:00:00 to 23:59:59) into seconds
pub fn parse_duration(text: &str) -> Result<u64, PaceError> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return Err(PaceError::Format(format!(
            "expected 3 fields separated by ':', got {}",
            parts.len()
        )));
    }

    // chrono accepts single digit fields, we want them zero-padded
    if parts
        .iter()
        .any(|part| part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(PaceError::Format(format!(
            "'{}' is not a zero-padded clock time",
            text
        )));
    }

    let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
        .map_err(|e| PaceError::Format(format!("cannot parse '{}': {}", text, e)))?;

    // Leap seconds ("23:59:60") parse but are not a valid duration here
    if time.nanosecond() >= 1_000_000_000 {
        return Err(PaceError::Format(format!("cannot parse '{}': leap second", text)));
    }

    Ok(u64::from(time.hour()) * SECONDS_PER_HOUR
        + u64::from(time.minute()) * SECONDS_PER_MINUTE
        + u64::from(time.second()))
}

/// Format duration in seconds to "HH:MM:SS" (hours are not wrapped at 24)
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format pace in minutes per unit to "min:sec"
pub fn format_pace(pace: f64) -> String {
    if !pace.is_finite() || pace <= 0.0 {
        return "N/A".to_string();
    }

    let breakdown = PaceBreakdown::from_pace(pace);
    format!("{}:{:02}", breakdown.minutes, breakdown.seconds)
}

/// Format a checkpoint distance with one decimal place
pub fn format_distance(distance: f64) -> String {
    format!("{:.1}", distance)
}
