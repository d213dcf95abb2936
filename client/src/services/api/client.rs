//! # API Client
//!
//! The single chokepoint for network access. Every screen-level helper in
//! [`auth`](super::auth) and [`resources`](super::resources) goes through
//! [`ApiClient::request`].
//!
//! ## Request Contract
//!
//! - `path` is joined to the base URL with exactly one slash
//! - `Content-Type: application/json` on every request
//! - `Authorization: Bearer <token>` whenever the session store holds one
//! - Extra headers replace the defaults of the same name, except
//!   `Authorization`, which the stored credential always wins
//! - The cookie jar replays the server's session cookie as a fallback
//! - Bodies are serialized to JSON; GET never carries one
//!
//! ## Response Contract
//!
//! - 2xx: decoded into the caller's type; a mismatch is `ApiError::Schema`
//! - 401/403: the session store is cleared, then `ApiError::Unauthenticated`
//! - other non-2xx: the server's `message` (or `error`) or a fallback
//! - no response at all: `ApiError::Transport`
//!
//! No retries. No timeout unless one is configured.

use std::sync::Arc;
use std::time::Instant;

use futures::future::FutureExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::ErrorResponse;

use super::error::{is_auth_failure, ApiError};
use super::inflight::InFlight;
use super::request::{resolve_url, HttpMethod, RequestDescriptor};
use crate::config::ClientConfig;
use crate::session::SessionStore;

/// HTTP client for the marketplace API.
///
/// Cheap to clone; clones share the connection pool, cookie jar, session
/// store and in-flight map.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Arc<str>,
    session: Arc<SessionStore>,
    inflight: InFlight,
}

impl ApiClient {
    /// Create a client for `config`, reading credentials from `session`.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::transport)?;

        Ok(Self {
            client,
            base_url: Arc::from(config.api_base_url.as_str()),
            session,
            inflight: InFlight::default(),
        })
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this client reads credentials from.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Issue a request and decode the JSON response as `T`.
    ///
    /// Plain GETs (no extra headers) are coalesced with identical
    /// in-flight GETs sent under the same credential.
    pub async fn request<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T, ApiError> {
        let credential = self.session.credential();
        let value = if request.method == HttpMethod::Get && request.extra_headers.is_empty() {
            let key = (
                request.method,
                resolve_url(&self.base_url, &request.path),
                credential.clone(),
            );
            let this = self.clone();
            self.inflight
                .run(key, move || async move { this.send(request, credential).await }.boxed())
                .await?
        } else {
            self.send(request, credential).await?
        };

        serde_json::from_value(value).map_err(|e| {
            tracing::warn!(error = %e, "Response did not match the expected shape");
            ApiError::schema(e)
        })
    }

    /// GET `path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(RequestDescriptor::get(path)).await
    }

    /// POST `body` to `path`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(RequestDescriptor::post(path, encode(body)?)).await
    }

    /// PUT `body` to `path`.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(RequestDescriptor::put(path, encode(body)?)).await
    }

    /// DELETE `path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(RequestDescriptor::delete(path)).await
    }

    /// DELETE `path` with a JSON body.
    pub async fn delete_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(RequestDescriptor::delete(path).with_body(encode(body)?))
            .await
    }

    /// Send one request with `credential` and return the raw JSON body.
    async fn send(&self, request: RequestDescriptor, credential: Option<String>) -> Result<Value, ApiError> {
        let url = resolve_url(&self.base_url, &request.path);
        let start = Instant::now();

        let headers = request_headers(&request, credential.as_deref())?;
        let mut builder = self.client.request(request.method.into(), &url).headers(headers);
        if let Some(body) = request.outgoing_body() {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, url = %url, authenticated = credential.is_some(), "Sending request");

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %request.method, url = %url, error = %e, "Network error");
            ApiError::transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(method = %request.method, url = %url, error = %e, "Failed to read response body");
            ApiError::transport(e)
        })?;
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                method = %request.method,
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Value::Null);
            }
            return serde_json::from_slice(&bytes).map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Response body is not JSON");
                ApiError::schema(e)
            });
        }

        let message = serde_json::from_slice::<ErrorResponse>(&bytes)
            .ok()
            .and_then(ErrorResponse::into_message);
        let error = ApiError::from_status(status.as_u16(), message);

        tracing::warn!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Request failed"
        );

        if is_auth_failure(status.as_u16()) && request.reset_session_on_auth_failure {
            if let Some(token) = &credential {
                if self.session.clear_if_credential(token) {
                    tracing::info!(url = %url, "Credential rejected, session cleared");
                }
            }
        }

        Err(error)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(ApiError::encode)
}

/// Defaults, then the descriptor's extras, then the bearer token.
///
/// Each step replaces earlier values of the same name, so exactly one
/// value per header goes out.
fn request_headers(request: &RequestDescriptor, credential: Option<&str>) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in &request.extra_headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(ApiError::encode)?;
        let value = HeaderValue::from_str(value).map_err(ApiError::encode)?;
        headers.insert(name, value);
    }

    if let Some(token) = credential {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(ApiError::encode)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
