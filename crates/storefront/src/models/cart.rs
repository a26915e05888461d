//! Cart domain types and totals math.

use rust_decimal::Decimal;
use sqlx::FromRow;

use taffreen_core::{CartLineId, ProductId};

/// A cart line joined with the product fields the cart page needs.
#[derive(Debug, Clone, FromRow)]
pub struct CartItem {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub title: String,
    pub slug: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl CartItem {
    /// quantity × unit price for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Cart totals: subtotal, shipping, and grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Flat shipping fee charged on any non-empty cart.
    #[must_use]
    pub fn shipping_fee() -> Decimal {
        Decimal::new(10, 0)
    }

    /// Compute totals for a cart.
    ///
    /// An empty cart totals to zero across the board - no shipping is
    /// charged when there is nothing to ship.
    #[must_use]
    pub fn compute(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        let shipping = if items.is_empty() {
            Decimal::ZERO
        } else {
            Self::shipping_fee()
        };

        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, price: &str, quantity: i32) -> CartItem {
        CartItem {
            id: CartLineId::new(id),
            product_id: ProductId::new(id),
            title: format!("Product {id}"),
            slug: format!("product-{id}"),
            price: price.parse().expect("valid decimal"),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_totals_sum_quantity_times_price() {
        let items = vec![item(1, "19.99", 2), item(2, "5.00", 1)];
        let totals = CartTotals::compute(&items);

        assert_eq!(totals.subtotal, "44.98".parse::<Decimal>().expect("decimal"));
        assert_eq!(totals.shipping, CartTotals::shipping_fee());
        assert_eq!(totals.total, "54.98".parse::<Decimal>().expect("decimal"));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(
            item(1, "2.50", 4).line_total(),
            "10.00".parse::<Decimal>().expect("decimal")
        );
    }
}
