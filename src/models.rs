use serde::{Deserialize, Serialize};

/// Pace calculation request, shared by the HTTP API and the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceRequest {
    #[serde(default)]
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_seconds: Option<i64>, // overridden by time_format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>, // HH:MM:SS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>, // overrides distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(default)]
    pub negative_split: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_distance: Option<i64>, // percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_difference: Option<i64>, // percent
}

/// Pace calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceResponse {
    pub distance: f64,
    pub time_in_seconds: u64,
    pub pace_minutes: u64,
    pub pace_seconds: u64,
    pub pace_decimal: f64,
    pub strategy_description: String,
    pub intervals: Vec<IntervalData>,
}

/// One checkpoint: distance covered and elapsed time as HH:MM:SS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalData {
    pub distance: f64,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            message: "API is working properly".to_string(),
        }
    }
}
