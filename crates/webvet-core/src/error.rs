//! Error types shared by the core and the checks

use thiserror::Error;

/// Result type alias using the webvet Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a check can propagate to the host runtime
///
/// An `Err` out of a check means its premise could not be evaluated at all;
/// ordinary findings are never expressed as errors.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Missing required configuration key: {key}")]
    MissingConfig { key: String },

    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // === Transport Errors ===
    #[error("Request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("Connection to {url} failed: {message}")]
    Connection { url: String, message: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

impl Error {
    /// Whether the failure lies in the supplied configuration rather than
    /// the target's behavior
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingConfig { .. } | Error::InvalidTarget(_) | Error::Configuration(_)
        )
    }

    /// Get an error code for logging/metrics
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingConfig { .. } => "MISSING_CONFIG",
            Error::InvalidTarget(_) => "INVALID_TARGET",
            Error::Configuration(_) => "CONFIG_ERROR",
            Error::Timeout { .. } => "TIMEOUT",
            Error::Connection { .. } => "CONNECTION_FAILED",
            Error::Request(_) => "REQUEST_FAILED",
            Error::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
        }
    }
}
