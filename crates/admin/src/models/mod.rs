//! Domain types for the admin dashboard.

pub mod session;

pub use session::{CurrentAdmin, Flash, session_keys};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use taffreen_core::{CategoryId, Email, ProductId, UserId};

/// A user account as the dashboard sees it.
#[derive(Debug, Clone, FromRow)]
pub struct UserAccount {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub session_epoch: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product row with its full editable field set.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRecord {
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

/// A category id/title pair for form selectors.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub title: String,
}
