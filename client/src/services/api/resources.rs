//! # Resource Endpoints
//!
//! Typed helpers for the listing and CRUD endpoints behind the collector and
//! artist screens. Listings unwrap the server's named collection key and
//! return the rows; mutations return the server's acknowledgement.

use shared::{
    Artist, ArtistInput, ArtistsResponse, Artwork, ArtworkInput, ArtworksResponse,
    CategoriesResponse, Category, CategoryInput, DashboardStats, MarketplaceArtwork,
    MarketplaceResponse, MessageResponse, PortfolioInput, PortfolioItem, PortfolioResponse,
    PurchaseRequest, Transaction, TransactionsResponse,
};

use super::client::ApiClient;
use super::endpoints::{self, item};
use super::error::ApiError;

// region:    --- Marketplace

/// Listings currently offered on the marketplace.
#[tracing::instrument(skip(client))]
pub async fn marketplace_artworks(client: &ApiClient) -> Result<Vec<MarketplaceArtwork>, ApiError> {
    let start = std::time::Instant::now();
    let response: MarketplaceResponse = client.get(endpoints::MARKETPLACE_AVAILABLE).await?;
    tracing::debug!(
        count = response.artworks.len(),
        duration_ms = start.elapsed().as_millis(),
        "Marketplace fetched"
    );
    Ok(response.artworks)
}

/// Buy a listing at its asking price.
#[tracing::instrument(skip(client))]
pub async fn purchase(client: &ApiClient, artwork_id: i64, amount: f64) -> Result<MessageResponse, ApiError> {
    client
        .post(endpoints::TRANSACTIONS, &PurchaseRequest::new(artwork_id, amount))
        .await
}

// endregion: --- Marketplace

// region:    --- Artworks

pub async fn artworks(client: &ApiClient) -> Result<Vec<Artwork>, ApiError> {
    let response: ArtworksResponse = client.get(endpoints::ARTWORKS).await?;
    Ok(response.artworks)
}

pub async fn create_artwork(client: &ApiClient, input: &ArtworkInput) -> Result<MessageResponse, ApiError> {
    client.post(endpoints::ARTWORKS, input).await
}

pub async fn update_artwork(
    client: &ApiClient,
    id: i64,
    input: &ArtworkInput,
) -> Result<MessageResponse, ApiError> {
    client.put(&item(endpoints::ARTWORKS, id), input).await
}

pub async fn delete_artwork(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.delete(&item(endpoints::ARTWORKS, id)).await
}

// endregion: --- Artworks

// region:    --- Artists

pub async fn artists(client: &ApiClient) -> Result<Vec<Artist>, ApiError> {
    let response: ArtistsResponse = client.get(endpoints::ARTISTS).await?;
    Ok(response.artists)
}

pub async fn create_artist(client: &ApiClient, input: &ArtistInput) -> Result<MessageResponse, ApiError> {
    client.post(endpoints::ARTISTS, input).await
}

pub async fn update_artist(
    client: &ApiClient,
    id: i64,
    input: &ArtistInput,
) -> Result<MessageResponse, ApiError> {
    client.put(&item(endpoints::ARTISTS, id), input).await
}

pub async fn delete_artist(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.delete(&item(endpoints::ARTISTS, id)).await
}

// endregion: --- Artists

// region:    --- Categories

pub async fn categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let response: CategoriesResponse = client.get(endpoints::CATEGORIES).await?;
    Ok(response.categories)
}

pub async fn create_category(client: &ApiClient, input: &CategoryInput) -> Result<MessageResponse, ApiError> {
    client.post(endpoints::CATEGORIES, input).await
}

pub async fn update_category(
    client: &ApiClient,
    id: i64,
    input: &CategoryInput,
) -> Result<MessageResponse, ApiError> {
    client.put(&item(endpoints::CATEGORIES, id), input).await
}

pub async fn delete_category(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.delete(&item(endpoints::CATEGORIES, id)).await
}

// endregion: --- Categories

// region:    --- Portfolio

/// The signed-in artist's portfolio.
pub async fn my_portfolio(client: &ApiClient) -> Result<Vec<PortfolioItem>, ApiError> {
    let response: PortfolioResponse = client.get(endpoints::MY_PORTFOLIO).await?;
    Ok(response.portfolios)
}

pub async fn create_portfolio_item(
    client: &ApiClient,
    input: &PortfolioInput,
) -> Result<MessageResponse, ApiError> {
    client.post(endpoints::PORTFOLIO, input).await
}

pub async fn update_portfolio_item(
    client: &ApiClient,
    id: i64,
    input: &PortfolioInput,
) -> Result<MessageResponse, ApiError> {
    client.put(&item(endpoints::PORTFOLIO, id), input).await
}

pub async fn delete_portfolio_item(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.delete(&item(endpoints::PORTFOLIO, id)).await
}

// endregion: --- Portfolio

// region:    --- Transactions & Stats

/// Sales involving the signed-in artist.
pub async fn my_transactions(client: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    let response: TransactionsResponse = client.get(endpoints::MY_TRANSACTIONS).await?;
    Ok(response.transactions)
}

/// Collector dashboard numbers.
pub async fn dashboard_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get(endpoints::DASHBOARD_STATS).await
}

/// Artist dashboard numbers.
pub async fn artist_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get(endpoints::ARTIST_STATS).await
}

// endregion: --- Transactions & Stats
