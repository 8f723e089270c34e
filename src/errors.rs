use axum::http::StatusCode;
use thiserror::Error;

use crate::constants::Preset;

/// Everything that can go wrong while turning a request into splits
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaceError {
    /// Malformed `HH:MM:SS` text
    #[error("Invalid time format (use HH:MM:SS): {0}")]
    Format(String),

    /// Non-positive distance/time or an unusable interval
    #[error("{0}")]
    Validation(String),

    #[error("Unknown preset: {0}. Available presets: {names}", names = preset_names())]
    UnknownPreset(String),

    /// Split parameters that leave no room for the faster segment
    #[error("invalid split configuration: {0}")]
    Configuration(String),

    #[error("cannot compute pace over a distance of {0}")]
    Division(f64),
}

impl PaceError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        PaceError::Validation(message.into())
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        PaceError::Configuration(message.into())
    }

    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaceError::Format(_)
            | PaceError::Validation(_)
            | PaceError::UnknownPreset(_)
            | PaceError::Configuration(_) => StatusCode::BAD_REQUEST,
            PaceError::Division(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn preset_names() -> String {
    Preset::ALL
        .iter()
        .map(|preset| preset.name())
        .collect::<Vec<_>>()
        .join(", ")
}
