use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,

    /// Address the HTTP server binds to, `LISTEN_ADDR` or the default.
    pub listen_addr: String,

    /// When true, demo data is injected into an empty database on startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .map(|value| value == "true" || value == "1")
                .unwrap_or(false),
        })
    }
}
