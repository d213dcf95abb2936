//! # Services Module
//!
//! External service integrations.
//!
//! ```text
//! services/
//! └── api/   - Artmarket HTTP API client and typed endpoint helpers
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, ApiError>`. Transport failures, non-2xx
//! responses and malformed bodies all arrive as an [`ApiError`](api::ApiError)
//! with a message fit for display; see [`api::error`].
//!
//! ## Thread Safety
//!
//! [`ApiClient`](api::ApiClient) is cheap to clone and safe to share across
//! tasks: clones share the connection pool, cookie jar, session store and
//! in-flight request map.

pub mod api;
