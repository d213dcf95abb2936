//! # Service Traits
//!
//! Traits for dependency injection, enabling testability and modularity.

use async_trait::async_trait;
use shared::{Category, MarketplaceArtwork, MessageResponse, Role, SignInResponse};

use crate::services::api::ApiError;

/// Backend operations the session manager and screen tasks rely on.
///
/// [`ApiClient`](crate::services::api::ApiClient) is the production
/// implementation; tests provide scripted fakes.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for an identity and bearer token
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError>;

    /// Register a new account (does not sign in)
    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<MessageResponse, ApiError>;

    /// End the server-side session
    async fn logout(&self) -> Result<(), ApiError>;

    /// Listings currently on the marketplace
    async fn marketplace_artworks(&self) -> Result<Vec<MarketplaceArtwork>, ApiError>;

    /// All artwork categories
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
}
