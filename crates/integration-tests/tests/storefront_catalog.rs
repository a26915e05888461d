//! Integration tests for category sorting.

use taffreen_integration_tests::{client, extract_prices, get_page};

/// Seeded category slug (see `taffreen-cli seed`).
const CATEGORY: &str = "fragrances";

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_low_high_sort_yields_non_decreasing_prices() {
    let client = client();
    let body = get_page(&client, &format!("/category/{CATEGORY}?sort=low-high")).await;

    let prices = extract_prices(&body);
    assert!(prices.len() >= 2, "expected several priced products");
    assert!(
        prices.windows(2).all(|w| w[0] <= w[1]),
        "low-high prices should be non-decreasing: {prices:?}"
    );
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_high_low_sort_yields_non_increasing_prices() {
    let client = client();
    let body = get_page(&client, &format!("/category/{CATEGORY}?sort=high-low")).await;

    let prices = extract_prices(&body);
    assert!(prices.len() >= 2, "expected several priced products");
    assert!(
        prices.windows(2).all(|w| w[0] >= w[1]),
        "high-low prices should be non-increasing: {prices:?}"
    );
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_unknown_sort_falls_back_to_default() {
    let client = client();

    let default_body = get_page(&client, &format!("/category/{CATEGORY}?sort=default")).await;
    let unknown_body = get_page(&client, &format!("/category/{CATEGORY}?sort=bogus")).await;

    assert_eq!(
        extract_prices(&default_body),
        extract_prices(&unknown_body),
        "an unknown sort value should silently serve the default order"
    );
}
