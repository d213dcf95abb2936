//! # Filter Criteria
//!
//! The query a marketplace screen builds from its search box, category
//! picker and price picker. Every field is optional; an unset field never
//! excludes a record.

/// Price picker options as `(label, range)`; an empty range means no limit.
pub const PRICE_PRESETS: &[(&str, &str)] = &[
    ("All Prices", ""),
    ("Under $1,000", "0-1000"),
    ("$1,000 - $5,000", "1000-5000"),
    ("$5,000 - $10,000", "5000-10000"),
    ("Over $10,000", "10000-"),
];

/// Inclusive price bounds. `max: None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Parse a picker value such as `"1000-5000"` or `"10000-"`.
    ///
    /// - empty or blank input: `None`
    /// - blank min: 0
    /// - non-numeric min: `None`, no price constraint at all
    /// - missing, non-numeric or zero max: open-ended
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let mut parts = raw.split('-');
        let min = match parts.next().map(str::trim) {
            Some("") | None => 0.0,
            Some(min) => match min.parse::<f64>() {
                Ok(min) if min.is_finite() => min,
                _ => {
                    tracing::debug!(range = raw, "Ignoring price range with non-numeric minimum");
                    return None;
                }
            },
        };

        // A zero max reads as "no max": "0-0" shows everything from 0 up.
        let max = parts
            .next()
            .map(str::trim)
            .and_then(|max| max.parse::<f64>().ok())
            .filter(|max| max.is_finite() && *max != 0.0);

        Some(Self { min, max })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive search over title, artist and description
    pub text: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    pub price: Option<PriceRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price constraint from a picker value (see [`PriceRange::parse`]).
    pub fn with_price_range(mut self, raw: &str) -> Self {
        self.price = PriceRange::parse(raw);
        self
    }

    pub fn with_price_bounds(mut self, min: f64, max: Option<f64>) -> Self {
        self.price = Some(PriceRange::new(min, max));
        self
    }

    /// Search text to apply, lowercased; `None` when blank.
    pub(crate) fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    pub(crate) fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.needle().is_none() && self.category().is_none() && self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_closed_and_open_ranges() {
        assert_eq!(PriceRange::parse("1000-5000"), Some(PriceRange::new(1000.0, Some(5000.0))));
        assert_eq!(PriceRange::parse("10000-"), Some(PriceRange::new(10000.0, None)));
        assert_eq!(PriceRange::parse("250"), Some(PriceRange::new(250.0, None)));
        assert_eq!(PriceRange::parse("-500"), Some(PriceRange::new(0.0, Some(500.0))));
    }

    #[test]
    fn non_numeric_min_means_no_constraint() {
        assert_eq!(PriceRange::parse("abc-200"), None);
        assert_eq!(FilterCriteria::new().with_price_range("abc-200").price, None);
    }

    #[test]
    fn unusable_max_is_open_ended() {
        assert_eq!(PriceRange::parse("100-abc"), Some(PriceRange::new(100.0, None)));
        assert_eq!(PriceRange::parse("100-0"), Some(PriceRange::new(100.0, None)));
    }

    #[test]
    fn blank_range_is_absent() {
        assert_eq!(PriceRange::parse(""), None);
        assert_eq!(PriceRange::parse("   "), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = PriceRange::new(1000.0, Some(5000.0));
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(!range.contains(999.99));
        assert!(!range.contains(5000.01));
    }

    #[test]
    fn every_preset_parses() {
        for (label, raw) in PRICE_PRESETS {
            let parsed = PriceRange::parse(raw);
            assert_eq!(parsed.is_none(), raw.is_empty(), "preset {label}");
        }
    }

    #[test]
    fn blank_fields_are_not_criteria() {
        let criteria = FilterCriteria::new().with_text("").with_category("");
        assert!(criteria.is_empty());
        assert!(!criteria.with_text("Blue").is_empty());
    }
}
