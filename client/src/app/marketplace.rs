//! # Marketplace Screen
//!
//! Screen state for browsing the marketplace: the fetched listings and
//! categories, the user's current criteria, and the filtered view.
//!
//! Opening the screen spawns both fetches in a [`ScreenTasks`] scope; results
//! arrive as [`AppEvent`]s and are folded in by [`MarketplaceScreen::handle_event`].
//! Dropping the screen aborts whatever is still in flight.

use std::sync::Arc;

use async_channel::Receiver;
use shared::{Category, MarketplaceArtwork};

use super::events::AppEvent;
use super::tasks::{self, ScreenTasks};
use crate::core::service::ApiService;
use crate::filter::{filter_marketplace, summarize, CollectionSummary, FilterCriteria};
use crate::services::api::ApiError;

pub struct MarketplaceScreen {
    tasks: ScreenTasks,
    events: Receiver<AppEvent>,
    pending: usize,
    pub artworks: Vec<MarketplaceArtwork>,
    pub categories: Vec<Category>,
    pub criteria: FilterCriteria,
    /// Last fetch error, shown instead of the listing
    pub error: Option<ApiError>,
}

impl MarketplaceScreen {
    /// Open the screen and start loading. Must be called inside a tokio runtime.
    pub fn open(api: Arc<dyn ApiService>) -> Self {
        let (event_tx, events) = async_channel::unbounded();
        let tasks = ScreenTasks::new("marketplace");

        tasks::fetch_marketplace(&tasks, Arc::clone(&api), event_tx.clone());
        tasks::fetch_categories(&tasks, api, event_tx);

        Self {
            tasks,
            events,
            pending: 2,
            artworks: Vec::new(),
            categories: Vec::new(),
            criteria: FilterCriteria::default(),
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.pending = self.pending.saturating_sub(1);
        match event {
            AppEvent::MarketplaceLoaded(Ok(artworks)) => {
                tracing::info!(count = artworks.len(), "Marketplace loaded");
                self.artworks = artworks;
                self.error = None;
            }
            AppEvent::MarketplaceLoaded(Err(e)) => {
                self.artworks.clear();
                self.error = Some(e);
            }
            AppEvent::CategoriesLoaded(Ok(categories)) => {
                self.categories = categories;
            }
            // The category picker just stays empty.
            AppEvent::CategoriesLoaded(Err(e)) => {
                tracing::warn!(error = %e, "Categories unavailable");
            }
        }
    }

    /// Wait until both fetches have reported.
    pub async fn load(&mut self) {
        while self.is_loading() {
            match self.events.recv().await {
                Ok(event) => self.handle_event(event),
                Err(_) => break,
            }
        }
    }

    /// Listings that pass the current criteria.
    pub fn visible(&self) -> Vec<&MarketplaceArtwork> {
        filter_marketplace(&self.artworks, &self.criteria)
    }

    pub fn summary(&self) -> CollectionSummary {
        summarize(self.visible())
    }

    /// Leave the screen early, abandoning any pending fetch.
    pub fn close(self) {
        self.tasks.cancel_all();
    }
}
