//! Handler for the symptom prediction endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Request body for `POST /`.
///
/// A missing `symptoms` key is treated as an empty description rather than
/// rejected, so clients that send `{}` still get a prediction.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: String,
}

/// Response body carrying the predicted disease label.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
}

// ---------------------------------------------------------------------------
// POST / -- predict a disease from a symptom description
// ---------------------------------------------------------------------------

/// Run the symptom text through the vectorizer and classifier.
///
/// Returns [`AppError::ModelNotLoaded`] when the service started without
/// its model artifacts and is running degraded.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let pipeline = state.pipeline.as_ref().ok_or(AppError::ModelNotLoaded)?;

    let prediction = pipeline.predict(&body.symptoms).to_owned();
    tracing::debug!(%prediction, "Served prediction");

    Ok(Json(PredictResponse { prediction }))
}
