//! # Normalized API Errors
//!
//! Every failure that leaves the API client is an [`ApiError`]. Callers never
//! see a `reqwest` error, and every variant carries a non-empty message that
//! can be shown to the user as-is.
//!
//! | Variant           | Cause                                        | Status |
//! |-------------------|----------------------------------------------|--------|
//! | `Transport`       | No response (offline, DNS, refused)          | none   |
//! | `Unauthenticated` | HTTP 401/403; the session was cleared        | yes    |
//! | `Http`            | Any other non-2xx                            | yes    |
//! | `Schema`          | 2xx body did not match the expected shape    | none   |
//! | `Encode`          | Request body could not be serialized         | none   |
//! | `Validation`      | Input rejected before any request was sent   | none   |
//! | `Storage`         | Session could not be persisted               | none   |

use thiserror::Error;

/// Message used when the server gives nothing better.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Message used when no response reached the client.
pub const TRANSPORT_MESSAGE: &str = "Unable to reach the server";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Transport { message: String },

    #[error("{message}")]
    Unauthenticated { status: u16, message: String },

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{message}")]
    Schema { message: String },

    #[error("{message}")]
    Encode { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Storage { message: String },
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// 401 and 403 map to [`ApiError::Unauthenticated`]. A blank message is
    /// replaced by [`FALLBACK_MESSAGE`].
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        if is_auth_failure(status) {
            ApiError::Unauthenticated { status, message }
        } else {
            ApiError::Http { status, message }
        }
    }

    pub fn transport(detail: impl std::fmt::Display) -> Self {
        tracing::debug!(detail = %detail, "Transport failure");
        ApiError::Transport {
            message: TRANSPORT_MESSAGE.to_string(),
        }
    }

    pub fn schema(detail: impl std::fmt::Display) -> Self {
        ApiError::Schema {
            message: format!("Unexpected response from server: {detail}"),
        }
    }

    pub fn encode(detail: impl std::fmt::Display) -> Self {
        ApiError::Encode {
            message: format!("Request could not be encoded: {detail}"),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn storage(detail: impl std::fmt::Display) -> Self {
        ApiError::Storage {
            message: format!("Session could not be saved: {detail}"),
        }
    }

    /// User-facing message. Never empty.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message }
            | ApiError::Unauthenticated { message, .. }
            | ApiError::Http { message, .. }
            | ApiError::Schema { message }
            | ApiError::Encode { message }
            | ApiError::Validation { message }
            | ApiError::Storage { message } => message,
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated { status, .. } | ApiError::Http { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated { .. })
    }
}

pub(crate) fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}
