//! # Marketplace Data Transfer Objects
//!
//! Listings returned by `GET /marketplace/available`.

use serde::{Deserialize, Serialize};

use super::nullable;

/// Status value of a listing that can still be bought.
pub const STATUS_AVAILABLE: &str = "available";

/// A marketplace listing.
///
/// Read-only on the client; a new fetch replaces the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketplaceArtwork {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub artist_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub seller_name: String,
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
}

impl MarketplaceArtwork {
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}

/// `{ "artworks": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketplaceResponse {
    pub artworks: Vec<MarketplaceArtwork>,
}

/// Purchase of a marketplace listing, posted to `/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRequest {
    pub artwork_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub notes: String,
}

impl PurchaseRequest {
    pub fn new(artwork_id: i64, amount: f64) -> Self {
        Self {
            artwork_id,
            amount,
            payment_method: "credit_card".to_string(),
            notes: "Purchase from marketplace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_accepts_null_text_fields() {
        let json = r#"{
            "id": 3,
            "title": "Sunset",
            "description": null,
            "price": 500,
            "category_name": "Painting",
            "artist_name": null,
            "status": "available"
        }"#;
        let artwork: MarketplaceArtwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.price, 500.0);
        assert!(artwork.description.is_empty());
        assert!(artwork.artist_name.is_empty());
        assert!(artwork.seller_name.is_empty());
        assert!(artwork.is_available());
    }

    #[test]
    fn listing_requires_price_and_status() {
        let json = r#"{"id": 3, "title": "Sunset"}"#;
        assert!(serde_json::from_str::<MarketplaceArtwork>(json).is_err());
    }
}
