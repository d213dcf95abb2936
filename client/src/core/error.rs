//! # Common Error Types
//!
//! Consolidated error handling for the Artmarket client.
//!
//! Library operations that talk to the server return
//! [`ApiError`](crate::services::api::ApiError) directly; it is the one error
//! shape screens display. [`AppError`] sits one level up and covers the
//! failures of wiring the client together: configuration, session storage
//! and API errors bubbling out of start-up.
//!
//! ## Error Categories
//!
//! - **Api**: Normalized backend errors
//! - **Config**: Missing or malformed configuration
//! - **Storage**: Session file could not be read or written
//!
//! ## Usage Pattern
//!
//! ```rust
//! use artmarket_client::core::error::{AppError, Result};
//!
//! fn base_url(input: &str) -> Result<&str> {
//!     if !input.starts_with("http") {
//!         return Err(AppError::Config(format!("Invalid base URL: {input}")));
//!     }
//!     Ok(input)
//! }
//!
//! assert!(base_url("ftp://example.com").is_err());
//! ```

use thiserror::Error;

use crate::services::api::ApiError;
use crate::session::StorageError;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error.
    ///
    /// Raised by [`ClientConfig::from_env`](crate::config::ClientConfig::from_env)
    /// and [`ClientConfig::validate`](crate::config::ClientConfig::validate).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
