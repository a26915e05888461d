//! Address domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use taffreen_core::{AddressId, UserId};

/// A shipping address owned by a user.
#[derive(Debug, Clone, FromRow)]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}
