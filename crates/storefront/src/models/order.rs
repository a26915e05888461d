//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use taffreen_core::{OrderId, OrderStatus, ProductId};

/// An order joined with the product fields the history page needs.
///
/// Orders are immutable snapshots taken at checkout; only `status` ever
/// changes after creation, and only by staff.
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithProduct {
    pub id: OrderId,
    pub product_id: ProductId,
    pub title: String,
    pub slug: String,
    pub price: Decimal,
    pub quantity: i32,
    pub status: OrderStatus,
    pub ordered_at: DateTime<Utc>,
}
