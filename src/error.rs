use thiserror::Error;

/// Errors that can occur around a menu import.
///
/// Parsing itself never fails; these cover reading input, configuration and
/// serialization.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Failed to read recipe text from a file or stdin
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a menu
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
