//! Error types for strapi-deploy operations.

use thiserror::Error;

/// The main error type for strapi-deploy operations.
#[derive(Error, Debug)]
pub enum DeployError {
    /// The operating system's secure random source could not produce bytes.
    ///
    /// Fatal: secret generation never falls back to weaker randomness.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for strapi-deploy operations.
pub type Result<T> = std::result::Result<T, DeployError>;

/// Helper macro to bail out with a DeployError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if instances == 0 {
///     bail!(Validation, "instances must be at least 1 for '{}'", name);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::DeployError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::DeployError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::DeployError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::DeployError::Other(format!($fmt, $($arg)*)))
    };
}
