//! Database operations for the store `PostgreSQL` schema.
//!
//! # Tables (schema `store`)
//!
//! - `users` / `user_passwords` - accounts and credentials
//! - `categories` / `products` / `product_reviews` - catalog
//! - `addresses` / `cart_lines` / `orders` - commerce
//! - `wishlists` / `wishlist_products` - saved products
//! - `subscriptions` / `contact_messages` / `blog_posts` - content
//!
//! Session storage lives in `tower_sessions.session`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p taffreen-cli -- migrate
//! ```

pub mod addresses;
pub mod blog;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod orders;
pub mod reviews;
pub mod subscriptions;
pub mod users;
pub mod wishlist;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use addresses::AddressRepository;
pub use blog::BlogRepository;
pub use cart::CartRepository;
pub use catalog::CatalogRepository;
pub use contact::ContactRepository;
pub use orders::OrderRepository;
pub use reviews::ReviewRepository;
pub use subscriptions::SubscriptionRepository;
pub use users::UserRepository;
pub use wishlist::WishlistRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found (or not owned by the requester).
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Map a unique-constraint violation to `Conflict`, everything else to
/// `Database`.
pub(crate) fn conflict_on_unique(e: sqlx::Error, message: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(message.to_owned());
    }
    RepositoryError::Database(e)
}

/// Map a foreign-key violation to `NotFound` (the referenced row is gone),
/// everything else to `Database`.
pub(crate) fn not_found_on_fk(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return RepositoryError::NotFound;
    }
    RepositoryError::Database(e)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
