//! # In-Flight Request Coalescing
//!
//! Concurrent identical GETs share one network round-trip. The first caller
//! starts the request; later callers with the same key await the same shared
//! future. The entry is removed as soon as any participant finishes or drops
//! out, so a completed response is never served to a later caller.
//!
//! The key includes the bearer credential the request is sent with, so a
//! request started under one session is never joined from another.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use serde_json::Value;

use super::error::ApiError;
use super::request::HttpMethod;

type SharedResponse = Shared<BoxFuture<'static, Result<Value, ApiError>>>;

/// (method, resolved URL, bearer credential)
pub(crate) type RequestKey = (HttpMethod, String, Option<String>);

#[derive(Clone, Default)]
pub(crate) struct InFlight {
    pending: Arc<Mutex<HashMap<RequestKey, SharedResponse>>>,
}

impl InFlight {
    /// Await the response for `key`, starting it with `start` if nobody else is.
    pub(crate) async fn run<F>(&self, key: RequestKey, start: F) -> Result<Value, ApiError>
    where
        F: FnOnce() -> BoxFuture<'static, Result<Value, ApiError>>,
    {
        let slot = {
            let mut pending = self.pending.lock();
            let response = match pending.get(&key) {
                Some(existing) => {
                    tracing::debug!(method = %key.0, url = %key.1, "Joining in-flight request");
                    existing.clone()
                }
                None => {
                    let response = start().shared();
                    pending.insert(key.clone(), response.clone());
                    response
                }
            };
            Slot {
                pending: Arc::clone(&self.pending),
                key,
                response,
            }
        };

        slot.response.clone().await
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pending.lock().len()
    }
}

/// Removes its entry on drop, if the entry is still the one it joined.
struct Slot {
    pending: Arc<Mutex<HashMap<RequestKey, SharedResponse>>>,
    key: RequestKey,
    response: SharedResponse,
}

impl Drop for Slot {
    fn drop(&mut self) {
        let mut pending = self.pending.lock();
        if pending
            .get(&self.key)
            .is_some_and(|current| current.ptr_eq(&self.response))
        {
            pending.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn key(path: &str) -> RequestKey {
        (HttpMethod::Get, format!("http://api.test{path}"), None)
    }

    fn key_as(path: &str, token: &str) -> RequestKey {
        (HttpMethod::Get, format!("http://api.test{path}"), Some(token.to_string()))
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_start() {
        let inflight = InFlight::default();
        let starts = Arc::new(AtomicUsize::new(0));

        let make = |starts: Arc<AtomicUsize>| {
            move || {
                starts.fetch_add(1, Ordering::SeqCst);
                async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok::<_, ApiError>(json!({"artworks": []}))
                }
                .boxed()
            }
        };

        let (a, b) = tokio::join!(
            inflight.run(key("/artworks"), make(Arc::clone(&starts))),
            inflight.run(key("/artworks"), make(Arc::clone(&starts))),
        );

        assert_eq!(a, b);
        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(inflight.len(), 0);
    }

    #[tokio::test]
    async fn finished_requests_are_not_reused() {
        let inflight = InFlight::default();
        let starts = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let starts = Arc::clone(&starts);
            inflight
                .run(key("/categories"), move || {
                    starts.fetch_add(1, Ordering::SeqCst);
                    async { Ok::<_, ApiError>(Value::Null) }.boxed()
                })
                .await
                .unwrap();
        }

        assert_eq!(starts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn errors_are_shared_too() {
        let inflight = InFlight::default();
        let failing = || async { Err::<Value, _>(ApiError::from_status(500, None)) }.boxed();

        let (a, b) = tokio::join!(
            inflight.run(key("/artists"), failing),
            inflight.run(key("/artists"), failing),
        );

        assert_eq!(a.unwrap_err().status(), Some(500));
        assert_eq!(b.unwrap_err().status(), Some(500));
    }

    #[tokio::test]
    async fn different_credentials_do_not_share() {
        let inflight = InFlight::default();
        let starts = Arc::new(AtomicUsize::new(0));

        let make = |starts: Arc<AtomicUsize>, owner: &'static str| {
            move || {
                starts.fetch_add(1, Ordering::SeqCst);
                async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok::<_, ApiError>(json!({ "owner": owner }))
                }
                .boxed()
            }
        };

        let (a, b, anonymous) = tokio::join!(
            inflight.run(key_as("/portfolio/my-portfolio", "tok-a"), make(Arc::clone(&starts), "A")),
            inflight.run(key_as("/portfolio/my-portfolio", "tok-b"), make(Arc::clone(&starts), "B")),
            inflight.run(key("/portfolio/my-portfolio"), make(Arc::clone(&starts), "nobody")),
        );

        assert_eq!(a.unwrap(), json!({ "owner": "A" }));
        assert_eq!(b.unwrap(), json!({ "owner": "B" }));
        assert_eq!(anonymous.unwrap(), json!({ "owner": "nobody" }));
        assert_eq!(starts.load(Ordering::SeqCst), 3);
        assert_eq!(inflight.len(), 0);
    }
}
