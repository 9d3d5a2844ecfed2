use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /    predict a disease from a symptom description
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(handlers::predict::predict))
}
