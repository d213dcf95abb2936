//! # Endpoint Paths
//!
//! Paths are relative to the configured base URL.

pub const SIGN_IN: &str = "/login";
pub const SIGN_UP: &str = "/signup";
pub const LOGOUT: &str = "/logout";

pub const DASHBOARD_STATS: &str = "/dashboard/stats";
pub const ARTIST_STATS: &str = "/dashboard/artist-stats";

pub const CATEGORIES: &str = "/categories";
pub const ARTISTS: &str = "/artists";
pub const ARTWORKS: &str = "/artworks";
pub const TRANSACTIONS: &str = "/transactions";
pub const MY_TRANSACTIONS: &str = "/transactions/my-transactions";
pub const MARKETPLACE_AVAILABLE: &str = "/marketplace/available";
pub const PORTFOLIO: &str = "/portfolio";
pub const MY_PORTFOLIO: &str = "/portfolio/my-portfolio";

/// Path of a single record under `collection`.
pub fn item(collection: &str, id: i64) -> String {
    format!("{collection}/{id}")
}
