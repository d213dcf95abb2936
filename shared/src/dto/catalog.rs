//! # Catalog Data Transfer Objects
//!
//! Records behind the collector and artist management screens. Each listing
//! endpoint wraps its rows under a named key (`artworks`, `artists`,
//! `categories`, `transactions`, `portfolios`).

use serde::{Deserialize, Serialize};

use super::nullable;

/// Artwork in a collector's catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub artist_id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub category_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub artist_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
}

/// Create/update payload for an artwork
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworkInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category_id: Option<i64>,
    pub artist_id: Option<i64>,
}

/// Artist known to a collector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub website: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
}

/// Create/update payload for an artist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Artwork category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

/// Create/update payload for a category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

/// Sale involving the signed-in artist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub buyer_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub seller_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub artwork_title: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub transaction_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,
}

/// Entry in an artist's portfolio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub portfolio_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
}

/// Create/update payload for a portfolio entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub external_link: String,
    pub portfolio_type: String,
}

impl Default for PortfolioInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            external_link: String::new(),
            portfolio_type: "gallery".to_string(),
        }
    }
}

/// Headline numbers for a dashboard
///
/// Accepts both `total_artworks` and the dashboard cards' `totalArtworks` naming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default, alias = "totalArtworks")]
    pub total_artworks: u64,
    #[serde(default, alias = "totalArtists")]
    pub total_artists: u64,
    #[serde(default, alias = "totalCategories")]
    pub total_categories: u64,
    #[serde(default, alias = "totalValue")]
    pub total_value: f64,
}

/// `{ "artworks": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworksResponse {
    pub artworks: Vec<Artwork>,
}

/// `{ "artists": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistsResponse {
    pub artists: Vec<Artist>,
}

/// `{ "categories": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// `{ "transactions": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

/// `{ "portfolios": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioResponse {
    pub portfolios: Vec<PortfolioItem>,
}
