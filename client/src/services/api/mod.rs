//! # Backend API Client Module
//!
//! HTTP client for the marketplace API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and ApiService wiring
//! ├── client.rs     - ApiClient and the request/response contract
//! ├── request.rs    - RequestDescriptor and URL resolution
//! ├── error.rs      - ApiError, the normalized error
//! ├── inflight.rs   - Coalescing of identical concurrent GETs
//! ├── endpoints.rs  - Endpoint paths
//! ├── auth.rs       - Sign-in, sign-up, logout
//! └── resources.rs  - Listings and CRUD for the management screens
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod inflight;
pub mod request;
pub mod resources;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{resolve_url, HttpMethod, RequestDescriptor};

use async_trait::async_trait;
use shared::{Category, MarketplaceArtwork, MessageResponse, Role, SignInResponse};

use crate::core::service::ApiService;

#[async_trait]
impl ApiService for ApiClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        auth::sign_in(self, email, password).await
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<MessageResponse, ApiError> {
        auth::sign_up(self, name, email, password, role).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        auth::logout(self).await
    }

    async fn marketplace_artworks(&self) -> Result<Vec<MarketplaceArtwork>, ApiError> {
        resources::marketplace_artworks(self).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        resources::categories(self).await
    }
}
