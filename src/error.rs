//! Error types for the save endpoint and configuration.
//!
//! Validation failures are not errors: they are reported as data through
//! [`ValidationResult`](crate::functional::validation_engine::ValidationResult).

/// Errors that can occur while saving a customer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Save endpoint responded with status {0}")]
    Status(u16),

    #[error("Save request failed: {0}")]
    Transport(String),

    #[error("Save response could not be decoded: {0}")]
    Decode(String),
}

/// Errors raised while building the API configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported API URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid authorization header value")]
    InvalidAuthorization,
}
