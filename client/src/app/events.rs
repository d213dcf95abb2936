//! # Application Events
//!
//! Results of screen tasks, delivered to the screen over an async channel.

use shared::{Category, MarketplaceArtwork};

use crate::services::api::ApiError;

/// Async task results sent to the screen that spawned them
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Marketplace listings received
    MarketplaceLoaded(Result<Vec<MarketplaceArtwork>, ApiError>),
    /// Category list received
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
}
