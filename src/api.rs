use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::errors::PaceError;
use crate::models::{ErrorResponse, HealthResponse, PaceRequest, PaceResponse};
use crate::plan;

/// Errors surfaced by the HTTP handlers, rendered as `{status: "error", message}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Pace(#[from] PaceError),

    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Pace(error) => error.status_code(),
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), error = %self, "request rejected");
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Build the API router: `GET /` health check and `POST /pace`
pub fn router() -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/pace", post(pace_handler).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

async fn pace_handler(
    payload: Result<Json<PaceRequest>, JsonRejection>,
) -> Result<Json<PaceResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    debug!(?request, "pace request");

    let response = plan::resolve(&request)?;
    Ok(Json(response))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
