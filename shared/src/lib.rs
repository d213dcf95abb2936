//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Artmarket client and the
//! marketplace API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Sign-in, sign-up and the persisted [`Identity`]
//!   - **[`dto::marketplace`]**: Marketplace listings browsed by artists
//!   - **[`dto::catalog`]**: Artworks, artists, categories, portfolio, transactions
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_price`]**: Format a price with thousands separators
//!
//! ## Wire Format
//!
//! - Field names are **snake_case**, matching the server
//! - Text fields the server may send as `null` deserialize to an empty string
//! - The collector role travels as `"user"` on the wire
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{SignInRequest, SignInResponse};
//!
//! let request = SignInRequest {
//!     email: "ada@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: SignInResponse = reqwest::Client::new()
//!     .post("http://localhost:5000/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
