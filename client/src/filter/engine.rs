//! # Marketplace Filtering
//!
//! A record is shown when all of these hold:
//!
//! 1. its status is exactly `"available"`
//! 2. the search text, if any, occurs in its title, artist name or
//!    description, ignoring case
//! 3. the category, if any, equals its category name exactly
//! 4. the price range, if any, contains its price
//!
//! Pure and synchronous; input order is preserved.

use shared::MarketplaceArtwork;

use super::criteria::FilterCriteria;

/// Records in `artworks` that match `criteria`, in their original order.
pub fn filter_marketplace<'a>(
    artworks: &'a [MarketplaceArtwork],
    criteria: &FilterCriteria,
) -> Vec<&'a MarketplaceArtwork> {
    let needle = criteria.needle();
    let filtered: Vec<_> = artworks
        .iter()
        .filter(|artwork| matches_with(artwork, criteria, needle.as_deref()))
        .collect();

    tracing::debug!(
        total = artworks.len(),
        shown = filtered.len(),
        "Marketplace filtered"
    );
    filtered
}

/// Whether a single record passes `criteria`.
pub fn matches(artwork: &MarketplaceArtwork, criteria: &FilterCriteria) -> bool {
    matches_with(artwork, criteria, criteria.needle().as_deref())
}

fn matches_with(artwork: &MarketplaceArtwork, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    if !artwork.is_available() {
        return false;
    }

    if let Some(needle) = needle {
        let hit = [&artwork.title, &artwork.artist_name, &artwork.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle));
        if !hit {
            return false;
        }
    }

    // Case-sensitive: category names come from the server's own list, so
    // "painting" does not match "Painting".
    if let Some(category) = criteria.category() {
        if artwork.category_name != category {
            return false;
        }
    }

    criteria.price.map_or(true, |range| range.contains(artwork.price))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, title: &str, artist: &str, category: &str, price: f64, status: &str) -> MarketplaceArtwork {
        MarketplaceArtwork {
            id,
            title: title.to_string(),
            description: format!("{title} by {artist}"),
            price,
            image_url: String::new(),
            category_name: category.to_string(),
            artist_name: artist.to_string(),
            seller_name: artist.to_string(),
            status: status.to_string(),
            created_at: "2024-05-01T10:00:00".to_string(),
        }
    }

    fn catalogue() -> Vec<MarketplaceArtwork> {
        vec![
            listing(1, "Blue Harbour", "Ines Kahl", "Painting", 800.0, "available"),
            listing(2, "Quiet Field", "Omar Reyes", "Photography", 2500.0, "available"),
            listing(3, "Blue Period Study", "Omar Reyes", "Painting", 12000.0, "sold"),
            listing(4, "Iron Bloom", "Tove Lind", "Sculpture", 7200.0, "available"),
            listing(5, "Night Market", "Ines Kahl", "Painting", 15000.0, "available"),
        ]
    }

    fn ids(filtered: &[&MarketplaceArtwork]) -> Vec<i64> {
        filtered.iter().map(|a| a.id).collect()
    }

    #[test]
    fn no_criteria_shows_every_available_record() {
        let artworks = catalogue();
        assert_eq!(ids(&filter_marketplace(&artworks, &FilterCriteria::new())), vec![1, 2, 4, 5]);
    }

    #[test]
    fn sold_records_are_hidden_even_when_price_matches() {
        let artworks = catalogue();
        let criteria = FilterCriteria::new().with_price_range("10000-");
        assert_eq!(ids(&filter_marketplace(&artworks, &criteria)), vec![5]);
    }

    #[test]
    fn status_must_match_exactly() {
        let artworks = vec![listing(9, "Echo", "A", "Painting", 10.0, "Available")];
        assert!(filter_marketplace(&artworks, &FilterCriteria::new()).is_empty());
    }

    #[test]
    fn text_is_case_insensitive_across_fields() {
        let artworks = catalogue();
        let by_title = FilterCriteria::new().with_text("BLUE");
        assert_eq!(ids(&filter_marketplace(&artworks, &by_title)), vec![1]);

        let by_artist = FilterCriteria::new().with_text("omar");
        assert_eq!(ids(&filter_marketplace(&artworks, &by_artist)), vec![2]);

        let by_description = FilterCriteria::new().with_text("by tove");
        assert_eq!(ids(&filter_marketplace(&artworks, &by_description)), vec![4]);
    }

    #[test]
    fn category_is_case_sensitive() {
        let artworks = catalogue();
        let exact = FilterCriteria::new().with_category("Painting");
        assert_eq!(ids(&filter_marketplace(&artworks, &exact)), vec![1, 5]);

        let lower = FilterCriteria::new().with_category("painting");
        assert!(filter_marketplace(&artworks, &lower).is_empty());
    }

    #[test]
    fn price_ranges_are_inclusive() {
        let artworks = catalogue();
        let criteria = FilterCriteria::new().with_price_range("800-2500");
        assert_eq!(ids(&filter_marketplace(&artworks, &criteria)), vec![1, 2]);

        let bounded = FilterCriteria::new().with_price_bounds(7000.0, Some(7200.0));
        assert_eq!(ids(&filter_marketplace(&artworks, &bounded)), vec![4]);
    }

    #[test]
    fn garbage_min_is_no_price_constraint() {
        let artworks = catalogue();
        let criteria = FilterCriteria::new().with_price_range("abc-200");
        assert_eq!(ids(&filter_marketplace(&artworks, &criteria)), vec![1, 2, 4, 5]);
    }

    #[test]
    fn criteria_combine_as_conjunction() {
        let artworks = catalogue();
        let criteria = FilterCriteria::new()
            .with_text("ines")
            .with_category("Painting")
            .with_price_range("0-1000");
        assert_eq!(ids(&filter_marketplace(&artworks, &criteria)), vec![1]);
        assert!(matches(&artworks[0], &criteria));
        assert!(!matches(&artworks[4], &criteria));
    }
}
