pub type Result<T> = std::result::Result<T, Error>;

/// Bootstrap-side errors (configuration, pool construction). Request-level
/// outcomes travel in the response envelope instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
