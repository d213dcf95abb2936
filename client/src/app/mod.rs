//! # Application Layer
//!
//! Screen-facing pieces that sit on top of the session and API layers.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Screen (CLI command, or any embedding UI)               │
//! │  - MarketplaceScreen: fetched records + FilterCriteria   │
//! │  - guard(route): role gating via SessionManager          │
//! └────────────┬─────────────────────────────────────────────┘
//!              │ ScreenTasks::spawn          ▲
//!              ▼                             │ async_channel (unbounded)
//! ┌────────────────────────────────┐         │ AppEvent
//! │  Tokio tasks                   │─────────┘
//! │  - fetch_marketplace()         │
//! │  - fetch_categories()          │
//! └────────────┬───────────────────┘
//!              ▼
//!        ApiService (ApiClient)
//! ```
//!
//! ## Key Components
//!
//! - **[`navigation`]**: [`Route`], role gating and the [`Navigator`] trait
//! - **[`tasks`]**: [`ScreenTasks`], fetches that die with their screen
//! - **[`events`]**: [`AppEvent`], task results
//! - **[`marketplace`]**: [`MarketplaceScreen`] state

pub mod events;
pub mod marketplace;
pub mod navigation;
pub mod tasks;

pub use events::AppEvent;
pub use marketplace::MarketplaceScreen;
pub use navigation::{guard, HistoryNavigator, Navigator, Route};
pub use tasks::ScreenTasks;
