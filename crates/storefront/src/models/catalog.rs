//! Catalog domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use taffreen_core::{CategoryId, ProductId, ReviewId};

/// A product category.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub is_active: bool,
    pub is_featured: bool,
}

/// A product.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub slug: String,
    pub sku: String,
    pub short_description: String,
    pub detail_description: String,
    pub price: Decimal,
    pub popularity: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub category_id: CategoryId,
}

/// A product review joined with its author's display name.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithAuthor {
    pub id: ReviewId,
    pub author: String,
    pub rating: i32,
    pub comment: String,
    pub posted_at: DateTime<Utc>,
}

/// A page of results with the navigation state the templates need.
///
/// Pages are 1-based; out-of-range requests are clamped, mirroring the
/// usual paginator behavior of serving the nearest valid page instead of
/// erroring.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Clamp a requested 1-based page number against the item count.
///
/// Returns the effective page number and its row offset. An empty result
/// set still has one (empty) page.
#[must_use]
pub fn clamp_page(requested: u32, total_items: u32, page_size: u32) -> (u32, u32) {
    let total_pages = total_pages(total_items, page_size);
    let number = requested.clamp(1, total_pages);
    (number, (number - 1) * page_size)
}

/// Number of pages needed for `total_items`, never less than 1.
#[must_use]
pub const fn total_pages(total_items: u32, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(page_size);
    if pages == 0 { 1 } else { pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
    }

    #[test]
    fn test_clamp_page_in_range() {
        assert_eq!(clamp_page(1, 30, 12), (1, 0));
        assert_eq!(clamp_page(2, 30, 12), (2, 12));
        assert_eq!(clamp_page(3, 30, 12), (3, 24));
    }

    #[test]
    fn test_clamp_page_out_of_range() {
        // Past the end: serve the last page
        assert_eq!(clamp_page(9, 30, 12), (3, 24));
        // Zero: serve the first page
        assert_eq!(clamp_page(0, 30, 12), (1, 0));
        // Empty result set: one empty page
        assert_eq!(clamp_page(5, 0, 12), (1, 0));
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = Page::<()> {
            items: vec![],
            number: 2,
            total_pages: 3,
            total_items: 30,
        };
        assert!(page.has_previous());
        assert!(page.has_next());

        let first = Page::<()> {
            items: vec![],
            number: 1,
            total_pages: 1,
            total_items: 5,
        };
        assert!(!first.has_previous());
        assert!(!first.has_next());
    }
}
