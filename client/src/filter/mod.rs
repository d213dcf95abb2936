//! # Filter Engine
//!
//! Client-side search over fetched marketplace records. No I/O.
//!
//! ```rust
//! use artmarket_client::filter::{filter_marketplace, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_text("harbour")
//!     .with_price_range("0-1000");
//! let shown = filter_marketplace(&[], &criteria);
//! assert!(shown.is_empty());
//! ```

pub mod criteria;
pub mod engine;
pub mod summary;

pub use criteria::{FilterCriteria, PriceRange, PRICE_PRESETS};
pub use engine::{filter_marketplace, matches};
pub use summary::{summarize, CollectionSummary, Summarizable, UNCATEGORIZED};
