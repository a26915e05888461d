//! Integration test helpers for Taffreen.
//!
//! # Running Tests
//!
//! These tests drive the real HTTP surface and therefore need:
//! - a running `PostgreSQL` with migrations applied
//!   (`taffreen-cli migrate`) and seed data (`taffreen-cli seed`)
//! - the storefront running (`cargo run -p taffreen-storefront`)
//! - for admin tests, the dashboard running (`cargo run -p taffreen-admin`)
//!   and `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD` set to a superuser
//!   created via `taffreen-cli admin create`
//!
//! They are `#[ignore]`d by default; run with `cargo test -- --ignored`.

use reqwest::Client;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Base URL for the admin dashboard (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:8001".to_string())
}

/// A browser-like client: cookie store on, redirects followed.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique throwaway email for one test run.
#[must_use]
pub fn unique_email() -> String {
    format!("test-{}@example.com", uuid::Uuid::new_v4().simple())
}

/// Register a fresh account and log it in on this client.
///
/// Returns the account's email.
///
/// # Panics
///
/// Panics if registration or login fails.
pub async fn register_and_login(client: &Client) -> String {
    let base = storefront_base_url();
    let email = unique_email();

    let resp = client
        .post(format!("{base}/auth/register"))
        .form(&[
            ("email", email.as_str()),
            ("name", "Test User"),
            ("password", "integration-pass"),
        ])
        .send()
        .await
        .expect("register request failed");
    assert!(resp.status().is_success(), "registration failed");

    let resp = client
        .post(format!("{base}/auth/login"))
        .form(&[("email", email.as_str()), ("password", "integration-pass")])
        .send()
        .await
        .expect("login request failed");
    assert!(resp.status().is_success(), "login failed");

    email
}

/// Fetch a page and return its body text.
///
/// # Panics
///
/// Panics if the request fails or the page is not 200.
pub async fn get_page(client: &Client, path: &str) -> String {
    let base = storefront_base_url();
    let resp = client
        .get(format!("{base}{path}"))
        .send()
        .await
        .expect("request failed");
    assert!(resp.status().is_success(), "GET {path} failed");
    resp.text().await.expect("failed to read body")
}

/// Extract every "$12.34"-style price from a page, in document order.
#[must_use]
pub fn extract_prices(body: &str) -> Vec<f64> {
    let mut prices = Vec::new();
    for chunk in body.split('$').skip(1) {
        let number: String = chunk
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if let Ok(value) = number.parse::<f64>() {
            prices.push(value);
        }
    }
    prices
}
