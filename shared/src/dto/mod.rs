//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the marketplace API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Sign-in, sign-up, logout and the client-side [`auth::Identity`]
//! - [`marketplace`] - Listings shown on the marketplace screen
//! - [`catalog`] - Artworks, artists, categories, portfolio items, transactions, stats
//!
//! ## Collections
//!
//! Listing endpoints wrap their rows under a named key:
//!
//! ```text
//! GET /categories
//!
//! {
//!   "categories": [
//!     { "id": 1, "name": "Painting", "description": "Oil and acrylic" }
//!   ]
//! }
//! ```
//!
//! ## Errors
//!
//! Failed requests answer with a JSON envelope carrying either `message` or
//! `error`; see [`auth::ErrorResponse`].

use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod catalog;
pub mod marketplace;

pub use auth::*;
pub use catalog::*;
pub use marketplace::*;

/// Deserialize a possibly-`null` field into its default value.
///
/// Pair with `#[serde(default)]` so a missing field is accepted too.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
