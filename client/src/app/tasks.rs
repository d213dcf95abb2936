//! # Screen Tasks
//!
//! Background fetches bound to a screen's lifetime.
//!
//! A screen owns one [`ScreenTasks`]. Fetches spawned through it send their
//! result as an [`AppEvent`]; when the screen goes away the scope is dropped
//! and every fetch still running is aborted, so no result is ever delivered
//! to a screen that is no longer shown.

use std::future::Future;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::events::AppEvent;
use crate::core::service::ApiService;

pub struct ScreenTasks {
    screen: &'static str,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl ScreenTasks {
    pub fn new(screen: &'static str) -> Self {
        Self {
            screen,
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawn a task owned by this screen. Must be called inside a tokio runtime.
    pub fn spawn<F>(&self, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let screen = self.screen;
        let handle = tokio::spawn(async move {
            tracing::debug!(screen, task = name, "Screen task started");
            task.await;
            tracing::debug!(screen, task = name, "Screen task finished");
        });

        let mut handles = self.handles.lock();
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Number of tasks not yet finished.
    pub fn active(&self) -> usize {
        self.handles.lock().iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every outstanding task.
    pub fn cancel_all(&self) {
        let handles: Vec<_> = std::mem::take(&mut *self.handles.lock());
        let aborted = handles.iter().filter(|h| !h.is_finished()).count();
        for handle in handles {
            handle.abort();
        }
        if aborted > 0 {
            tracing::debug!(screen = self.screen, aborted, "Screen tasks cancelled");
        }
    }
}

impl Drop for ScreenTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Fetch marketplace listings and report them as [`AppEvent::MarketplaceLoaded`].
pub fn fetch_marketplace(tasks: &ScreenTasks, api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    tasks.spawn("fetch_marketplace", async move {
        let result = api.marketplace_artworks().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to fetch marketplace");
        }
        let _ = event_tx.send(AppEvent::MarketplaceLoaded(result)).await;
    });
}

/// Fetch categories and report them as [`AppEvent::CategoriesLoaded`].
pub fn fetch_categories(tasks: &ScreenTasks, api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    tasks.spawn("fetch_categories", async move {
        let result = api.categories().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to fetch categories");
        }
        let _ = event_tx.send(AppEvent::CategoriesLoaded(result)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ApiError;
    use async_trait::async_trait;
    use shared::{Category, MarketplaceArtwork, MessageResponse, Role, SignInResponse};
    use std::time::Duration;

    struct SlowApi {
        delay: Duration,
    }

    #[async_trait]
    impl ApiService for SlowApi {
        async fn sign_in(&self, _: &str, _: &str) -> Result<SignInResponse, ApiError> {
            Err(ApiError::validation("unused"))
        }

        async fn sign_up(&self, _: &str, _: &str, _: &str, _: Role) -> Result<MessageResponse, ApiError> {
            Err(ApiError::validation("unused"))
        }

        async fn logout(&self) -> Result<(), ApiError> {
            Ok(())
        }

        async fn marketplace_artworks(&self) -> Result<Vec<MarketplaceArtwork>, ApiError> {
            tokio::time::sleep(self.delay).await;
            Ok(Vec::new())
        }

        async fn categories(&self) -> Result<Vec<Category>, ApiError> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![Category {
                id: 1,
                name: "Painting".to_string(),
                description: String::new(),
            }])
        }
    }

    #[tokio::test]
    async fn finished_fetch_is_delivered() {
        let api: Arc<dyn ApiService> = Arc::new(SlowApi { delay: Duration::ZERO });
        let (tx, rx) = async_channel::unbounded();
        let tasks = ScreenTasks::new("marketplace");

        fetch_categories(&tasks, api, tx);

        match rx.recv().await.unwrap() {
            AppEvent::CategoriesLoaded(Ok(categories)) => assert_eq!(categories[0].name, "Painting"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn dropped_screen_never_receives_results() {
        let api: Arc<dyn ApiService> = Arc::new(SlowApi {
            delay: Duration::from_millis(200),
        });
        let (tx, rx) = async_channel::unbounded();

        let tasks = ScreenTasks::new("marketplace");
        fetch_marketplace(&tasks, Arc::clone(&api), tx.clone());
        fetch_categories(&tasks, api, tx.clone());
        assert_eq!(tasks.active(), 2);
        drop(tasks);
        drop(tx);

        // Aborted tasks drop their senders, closing the channel without a message.
        assert!(rx.recv().await.is_err());
    }

    #[tokio::test]
    async fn cancel_all_leaves_scope_reusable() {
        let api: Arc<dyn ApiService> = Arc::new(SlowApi {
            delay: Duration::from_millis(200),
        });
        let (tx, rx) = async_channel::unbounded();
        let tasks = ScreenTasks::new("marketplace");

        fetch_marketplace(&tasks, Arc::clone(&api), tx.clone());
        tasks.cancel_all();
        assert_eq!(tasks.active(), 0);

        let fast: Arc<dyn ApiService> = Arc::new(SlowApi { delay: Duration::ZERO });
        fetch_marketplace(&tasks, fast, tx);
        assert!(matches!(rx.recv().await.unwrap(), AppEvent::MarketplaceLoaded(Ok(_))));
        assert!(rx.try_recv().is_err());
    }
}
