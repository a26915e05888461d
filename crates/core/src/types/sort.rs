//! Catalog sort orders.

use serde::{Deserialize, Serialize};

/// Sort order for a category's product listing.
///
/// Parsed from the `?sort=` query parameter. Unknown values fall back to
/// [`ProductSort::Default`] silently rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    /// Insertion order (ascending id).
    #[default]
    Default,
    /// Descending popularity counter.
    Popularity,
    /// Ascending price.
    LowHigh,
    /// Descending price.
    HighLow,
}

impl ProductSort {
    /// Parse a sort parameter; anything unrecognized is the default order.
    #[must_use]
    pub fn from_query(s: &str) -> Self {
        match s {
            "popularity" => Self::Popularity,
            "low-high" => Self::LowHigh,
            "high-low" => Self::HighLow,
            _ => Self::Default,
        }
    }

    /// The query-parameter form, for building links in templates.
    #[must_use]
    pub const fn as_query(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Popularity => "popularity",
            Self::LowHigh => "low-high",
            Self::HighLow => "high-low",
        }
    }

    /// The `ORDER BY` clause fragment for this sort order.
    ///
    /// Column names only; never interpolates user input.
    #[must_use]
    pub const fn order_clause(&self) -> &'static str {
        match self {
            Self::Default => "id ASC",
            Self::Popularity => "popularity DESC, id ASC",
            Self::LowHigh => "price ASC, id ASC",
            Self::HighLow => "price DESC, id ASC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_known_values() {
        assert_eq!(ProductSort::from_query("popularity"), ProductSort::Popularity);
        assert_eq!(ProductSort::from_query("low-high"), ProductSort::LowHigh);
        assert_eq!(ProductSort::from_query("high-low"), ProductSort::HighLow);
        assert_eq!(ProductSort::from_query("default"), ProductSort::Default);
    }

    #[test]
    fn test_from_query_unknown_falls_back_silently() {
        assert_eq!(ProductSort::from_query(""), ProductSort::Default);
        assert_eq!(ProductSort::from_query("price"), ProductSort::Default);
        assert_eq!(ProductSort::from_query("POPULARITY"), ProductSort::Default);
    }

    #[test]
    fn test_order_clause_direction() {
        assert!(ProductSort::Popularity.order_clause().contains("popularity DESC"));
        assert!(ProductSort::LowHigh.order_clause().contains("price ASC"));
        assert!(ProductSort::HighLow.order_clause().contains("price DESC"));
    }

    #[test]
    fn test_query_roundtrip() {
        for sort in [
            ProductSort::Default,
            ProductSort::Popularity,
            ProductSort::LowHigh,
            ProductSort::HighLow,
        ] {
            assert_eq!(ProductSort::from_query(sort.as_query()), sort);
        }
    }
}
