use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use medbot_api::config::ServerConfig;
use medbot_api::routes;
use medbot_api::state::AppState;
use medbot_core::InferencePipeline;

/// Vectorizer fixture with a three-word vocabulary and neutral idf weights.
const VECTORIZER_JSON: &str = r#"{
    "vocabulary": {"fever": 0, "cough": 1, "rash": 2},
    "idf": [1.0, 1.0, 1.0]
}"#;

/// Classifier fixture mapping fever/cough onto "flu" and rash onto "measles".
const MODEL_JSON: &str = r#"{
    "classes": ["flu", "measles"],
    "weights": [[1.0, 1.0, -1.0], [-1.0, -1.0, 2.0]],
    "intercepts": [0.5, 0.0]
}"#;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        vectorizer_path: "models/vectorizer.json".into(),
        model_path: "models/disease_model.json".into(),
    }
}

/// Write the fixture artifacts into `dir` and load a pipeline from them.
pub fn load_fixture_pipeline(dir: &Path) -> Arc<InferencePipeline> {
    let vectorizer_path = dir.join("vectorizer.json");
    let model_path = dir.join("disease_model.json");
    std::fs::write(&vectorizer_path, VECTORIZER_JSON).expect("Failed to write vectorizer fixture");
    std::fs::write(&model_path, MODEL_JSON).expect("Failed to write model fixture");

    let pipeline = InferencePipeline::from_files(&vectorizer_path, &model_path)
        .expect("Fixture artifacts must load");
    Arc::new(pipeline)
}

/// Build the full application router with all middleware layers, using the
/// given pipeline (or `None` to exercise degraded mode).
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(config: ServerConfig, pipeline: Option<Arc<InferencePipeline>>) -> Router {
    let cors = build_cors_layer(&config);

    let state = AppState {
        pipeline,
        config: Arc::new(config),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer the same way `main.rs` does.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_allow_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| o.parse().expect("Invalid CORS origin in test config"))
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
