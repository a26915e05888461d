//! Display formatting helpers for view structs.
//!
//! Routes pre-format prices and dates into strings before handing them to
//! templates, so the templates themselves only interpolate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format a decimal amount as a dollar price string.
#[must_use]
pub fn price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Format an average rating to one decimal place, "-" when there is none.
#[must_use]
pub fn rating(average: Option<Decimal>) -> String {
    average.map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"))
}

/// Format a timestamp for display (e.g., "Aug 07, 2026").
#[must_use]
pub fn date(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_two_decimal_places() {
        assert_eq!(price("19.99".parse().expect("decimal")), "$19.99");
        assert_eq!(price("10".parse().expect("decimal")), "$10.00");
        assert_eq!(price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_rating_formats_or_dashes() {
        assert_eq!(rating(None), "-");
        assert_eq!(rating(Some("4.25".parse().expect("decimal"))), "4.2");
        assert_eq!(rating(Some("5".parse().expect("decimal"))), "5.0");
    }

    #[test]
    fn test_date_format() {
        let at = DateTime::parse_from_rfc3339("2026-08-07T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        assert_eq!(date(at), "Aug 07, 2026");
    }
}
