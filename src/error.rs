//! Error types for the SolarEdge to MongoDB aggregator.
//!
//! This module defines typed errors for the different components of the
//! application, providing better error categorization and enabling specific
//! error handling strategies.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Monitoring API communication and decoding errors
    #[error("upstream error")]
    Upstream(#[from] UpstreamError),

    /// MongoDB persistence errors
    #[error("persistence error")]
    Persistence(#[from] PersistenceError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),
}

/// Monitoring API communication and decoding errors.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API key was rejected (401/403)
    #[error("authentication failed: invalid API key")]
    AuthFailed,

    /// Server returned an error status
    #[error("server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not match the expected structure
    #[error("malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },
}

/// MongoDB persistence errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// MongoDB driver error
    #[error("MongoDB error: {0}")]
    Client(#[from] mongodb::error::Error),

    /// Record could not be serialized to BSON
    #[error("BSON serialization error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    /// Stored document is missing its identity field
    #[error("stored document for date {date} has no _id")]
    MissingId { date: String },
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }
}

impl UpstreamError {
    /// Creates a server error from HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        if status.as_u16() == 401 || status.as_u16() == 403 {
            Self::AuthFailed
        } else {
            Self::ServerError {
                status: status.as_u16(),
                message: body,
            }
        }
    }

    /// Creates a malformed response error.
    pub fn malformed(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }
}

impl PersistenceError {
    /// Creates a missing identity error.
    pub fn missing_id(date: impl Into<String>) -> Self {
        Self::MissingId { date: date.into() }
    }
}
