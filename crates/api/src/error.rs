use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the service's JSON error
/// bodies, shaped `{"error": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The model artifacts failed to load at startup. The service runs
    /// degraded and every prediction request gets this error until the
    /// process is restarted with valid artifacts.
    #[error("Model not loaded")]
    ModelNotLoaded,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ModelNotLoaded => (StatusCode::INTERNAL_SERVER_ERROR, "Model not loaded"),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
