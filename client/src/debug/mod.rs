//! # Logging
//!
//! Structured logging for the client library and the `artmarket` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job (or the embedding application's).
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `artmarket_client=debug,info`)
//! - `ARTMARKET_LOG_DIR`: Also write daily-rotated logs to this directory

pub mod logger;

pub use logger::init as init_logger;
