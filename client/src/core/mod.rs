//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`ApiService`] trait the session manager and screen
//!   tasks depend on, so tests can swap in a fake backend
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use artmarket_client::core::ApiService;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, store)?);
//!
//! // In tests: a scripted fake
//! let api: Arc<dyn ApiService> = Arc::new(FakeApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
