use crate::constants::SECONDS_PER_MINUTE;
use crate::errors::PaceError;

/// Average pace in minutes per unit of distance
pub fn compute_pace(distance: f64, total_seconds: u64) -> Result<f64, PaceError> {
    if distance == 0.0 || !distance.is_finite() {
        return Err(PaceError::Division(distance));
    }

    let minutes = total_seconds as f64 / SECONDS_PER_MINUTE as f64;
    Ok(minutes / distance)
}

/// Pace split into whole minutes and leftover whole seconds for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaceBreakdown {
    pub minutes: u64,
    pub seconds: u64,
}

impl PaceBreakdown {
    /// Both parts are truncated, so 4.99 min/unit reads as 4 min 59 s
    pub fn from_pace(pace: f64) -> Self {
        let minutes = pace.floor();
        let seconds = ((pace - minutes) * SECONDS_PER_MINUTE as f64).floor();

        Self {
            minutes: minutes as u64,
            seconds: seconds as u64,
        }
    }
}
