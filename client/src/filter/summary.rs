//! # Collection Summary
//!
//! Figures for the dashboard cards and the per-category chart, computed
//! from whatever records the screen already fetched.

use std::collections::HashSet;

use shared::{Artwork, MarketplaceArtwork};

/// Chart label for records without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Fields a record needs to be summarized.
pub trait Summarizable {
    fn artist_name(&self) -> &str;
    fn category_name(&self) -> &str;
    fn price(&self) -> f64;
}

impl Summarizable for MarketplaceArtwork {
    fn artist_name(&self) -> &str {
        &self.artist_name
    }

    fn category_name(&self) -> &str {
        &self.category_name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl Summarizable for Artwork {
    fn artist_name(&self) -> &str {
        &self.artist_name
    }

    fn category_name(&self) -> &str {
        &self.category_name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSummary {
    pub count: usize,
    pub distinct_artists: usize,
    pub distinct_categories: usize,
    pub total_value: f64,
    /// `(category, count)` in the order categories first appear
    pub by_category: Vec<(String, usize)>,
}

/// Summarize `records`, e.g. a fetched `&Vec<Artwork>` or a filtered
/// `Vec<&MarketplaceArtwork>`.
pub fn summarize<'a, T, I>(records: I) -> CollectionSummary
where
    T: Summarizable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = 0;
    let mut artists = HashSet::new();
    let mut by_category: Vec<(String, usize)> = Vec::new();
    let mut total_value = 0.0;

    for record in records {
        seen += 1;
        if !record.artist_name().is_empty() {
            artists.insert(record.artist_name());
        }
        total_value += record.price();

        let category = match record.category_name() {
            "" => UNCATEGORIZED,
            name => name,
        };
        match by_category.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => by_category.push((category.to_string(), 1)),
        }
    }

    CollectionSummary {
        count: seen,
        distinct_artists: artists.len(),
        distinct_categories: by_category.len(),
        total_value,
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(artist: &str, category: &str, price: f64) -> MarketplaceArtwork {
        MarketplaceArtwork {
            id: 1,
            title: "Untitled".to_string(),
            description: String::new(),
            price,
            image_url: String::new(),
            category_name: category.to_string(),
            artist_name: artist.to_string(),
            seller_name: String::new(),
            status: "available".to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn empty_collection() {
        let summary = summarize(Vec::<&MarketplaceArtwork>::new());
        assert_eq!(summary, CollectionSummary::default());
    }

    #[test]
    fn counts_in_first_seen_order() {
        let records = vec![
            listing("Ines", "Sculpture", 100.0),
            listing("Omar", "Painting", 250.5),
            listing("Ines", "Sculpture", 50.0),
            listing("Tove", "", 10.0),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.count, 4);
        assert_eq!(summary.distinct_artists, 3);
        assert_eq!(summary.distinct_categories, 3);
        assert!((summary.total_value - 410.5).abs() < f64::EPSILON);
        assert_eq!(
            summary.by_category,
            vec![
                ("Sculpture".to_string(), 2),
                ("Painting".to_string(), 1),
                (UNCATEGORIZED.to_string(), 1),
            ]
        );
    }
}
