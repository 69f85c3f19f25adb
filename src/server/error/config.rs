use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// `DATABASE_URL` is the only required variable; `LISTEN_ADDR` and
    /// `SEED_DEMO_DATA` fall back to defaults when absent.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
