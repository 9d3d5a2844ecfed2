use std::sync::Arc;

use medbot_core::InferencePipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The loaded vectorizer/classifier pair, or `None` when artifact
    /// loading failed at startup and the service runs degraded.
    pub pipeline: Option<Arc<InferencePipeline>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
