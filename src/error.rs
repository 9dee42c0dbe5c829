//! Error types for Power Forecast
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//!
//! [`ForecastError`] describes why a forecast request failed. It is stored in
//! the request state and sent across threads, so it carries plain messages
//! and is `Clone`. [`Error`] is the application-level error and keeps the
//! source chain of I/O and parse failures.

use snafu::Snafu;

/// Why a forecast request did not produce a series
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum ForecastError {
    /// User input could not be turned into a request; never reaches the network
    #[snafu(display("Invalid query: {reason}"))]
    InvalidQuery { reason: String },

    /// Network failure, timeout, or a body that is not JSON
    #[snafu(display("Transport error: {message}"))]
    Transport { message: String },

    /// The prediction service answered with an `error` field
    #[snafu(display("{message}"))]
    Service { message: String },

    /// JSON that lacks the expected fields or has mismatched arrays
    #[snafu(display("Response format error: {message}"))]
    ResponseFormat { message: String },

    /// A request is in flight
    #[snafu(display("Busy: a forecast request is already in flight"))]
    Busy,
}

impl ForecastError {
    /// Short category name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ForecastError::InvalidQuery { .. } => "invalid_query",
            ForecastError::Transport { .. } => "transport",
            ForecastError::Service { .. } => "service",
            ForecastError::ResponseFormat { .. } => "response_format",
            ForecastError::Busy => "busy",
        }
    }
}

impl From<reqwest::Error> for ForecastError {
    fn from(source: reqwest::Error) -> Self {
        ForecastError::Transport {
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(source: serde_json::Error) -> Self {
        ForecastError::Transport {
            message: format!("response body is not JSON: {source}"),
        }
    }
}

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Forecast request failure
    #[snafu(transparent)]
    Forecast { source: ForecastError },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config files, log directory, chart output)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Result of a forecast operation
pub type ForecastResult<T> = std::result::Result<T, ForecastError>;
