//! Error types for the Countryscope plugin.
//!
//! This module defines the centralized error type [`CountryscopeError`], the
//! fetch-specific [`FetchError`], and a [`Result`] alias used throughout the
//! crate. All errors are implemented using the `thiserror` crate.
//!
//! None of these errors is fatal. The event handler logs them and the worst
//! visible outcome is the load-error panel.

use thiserror::Error;

/// Failure to obtain the country list from the REST endpoint.
///
/// The Zellij host reports transport failures as a non-2xx status, so both
/// transport and HTTP failures surface as [`FetchError::Status`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The host answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not a JSON array of countries.
    #[error("failed to decode country list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The main error type for Countryscope operations.
///
/// # Examples
///
/// ```
/// use countryscope::CountryscopeError;
///
/// fn validate_config() -> Result<(), CountryscopeError> {
///     Err(CountryscopeError::Config("api_url must not be empty".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CountryscopeError {
    /// Reading from or writing to the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The country list could not be fetched or decoded.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Countryscope operations.
pub type Result<T> = std::result::Result<T, CountryscopeError>;
