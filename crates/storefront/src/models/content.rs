//! Content and messaging domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use taffreen_core::{BlogPostId, SubscriptionId};

/// A blog post; the body is markdown, rendered at display time.
#[derive(Debug, Clone, FromRow)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

/// A newsletter subscription.
#[derive(Debug, Clone, FromRow)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}
