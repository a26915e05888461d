//! User domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use taffreen_core::{Email, UserId};

/// A storefront user (domain type).
///
/// The password hash is never part of this type; it lives in its own table
/// and is only touched by the auth service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// User's display name.
    pub name: String,
    /// Whether the user may view the admin dashboard.
    pub is_staff: bool,
    /// Whether the user may manage users and products.
    pub is_superuser: bool,
    /// Bumped to invalidate the user's existing sessions.
    pub session_epoch: i32,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
