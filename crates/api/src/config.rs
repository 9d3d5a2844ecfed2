use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// The single value `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path of the vectorizer artifact.
    pub vectorizer_path: PathBuf,
    /// Path of the classifier artifact.
    pub model_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `8000`                      |
    /// | `CORS_ORIGINS`         | `*`                         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `VECTORIZER_PATH`      | `models/vectorizer.json`    |
    /// | `MODEL_PATH`           | `models/disease_model.json` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let vectorizer_path: PathBuf = std::env::var("VECTORIZER_PATH")
            .unwrap_or_else(|_| "models/vectorizer.json".into())
            .into();

        let model_path: PathBuf = std::env::var("MODEL_PATH")
            .unwrap_or_else(|_| "models/disease_model.json".into())
            .into();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            vectorizer_path,
            model_path,
        }
    }

    /// Whether CORS should allow any origin (`CORS_ORIGINS=*`).
    pub fn cors_allow_any(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}
