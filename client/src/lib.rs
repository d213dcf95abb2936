//! # Artmarket Client - Library Root
//!
//! Client for the Artmarket service: a session-aware HTTP API client, the
//! sign-in/sign-out lifecycle, and client-side search over marketplace
//! listings. The `artmarket` binary (`main.rs`) is a thin CLI over this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Screens (CLI commands / embedding UI)                  │
//! │    app::MarketplaceScreen, app::guard                   │
//! └───────┬───────────────────────┬─────────────────────────┘
//!         │                       │
//!         ▼                       ▼
//! ┌───────────────────┐   ┌──────────────────────────────┐
//! │  SessionManager   │   │  filter (pure)               │
//! │  sign in/up/out   │   │  filter_marketplace          │
//! └───────┬───────────┘   │  summarize                   │
//!         │ ApiService    └──────────────────────────────┘
//!         ▼                       ▲ records
//! ┌──────────────────────────────────────────────────────┐
//! │  ApiClient                                           │
//! │  bearer token + cookie jar, error normalization,     │
//! │  GET coalescing, 401/403 => session cleared          │
//! └───────┬──────────────────────────────┬───────────────┘
//!         │ credential                   │ HTTP/JSON
//!         ▼                              ▼
//! ┌───────────────────┐          ┌─────────────────────┐
//! │  SessionStore     │          │  Artmarket API      │
//! │  FileStorage      │          │  (default :5000)    │
//! └───────────────────┘          └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: `AppError` and the [`ApiService`](crate::core::ApiService) trait
//! - **config**: `ClientConfig` from the environment
//! - **services**: `api`, the HTTP client and typed endpoint helpers
//! - **session**: storage, the session store, and the session manager
//! - **filter**: marketplace filtering and dashboard aggregation
//! - **app**: routes, screen-scoped tasks, marketplace screen state
//! - **debug**: logging initialization
//!
//! ## Wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use artmarket_client::{
//!     app::HistoryNavigator, config::ClientConfig, services::api::ApiClient,
//!     session::{FileStorage, SessionManager, SessionStore},
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let store = Arc::new(SessionStore::new(Arc::new(FileStorage::new(&config.session_file))));
//! let client = ApiClient::new(&config, Arc::clone(&store))?;
//! let manager = SessionManager::new(Arc::new(client), store, Arc::new(HistoryNavigator::new()));
//!
//! manager.start();
//! manager.sign_in("ada@example.com", "secret").await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod filter;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use self::core::{ApiService, AppError, Result};
pub use filter::{filter_marketplace, FilterCriteria};
pub use services::api::{ApiClient, ApiError};
pub use session::{SessionManager, SessionState, SessionStore};
