//! Integration tests for admin product management and SKU assignment.
//!
//! Requires a superuser created via:
//! `taffreen-cli admin create -e <email> -n Admin -p <password> --superuser`
//! with `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD` pointing at it.

use reqwest::Client;
use uuid::Uuid;

use taffreen_integration_tests::{admin_base_url, client};

/// Log the configured superuser into the dashboard on this client.
async fn admin_login(client: &Client) {
    let base = admin_base_url();
    let email = std::env::var("ADMIN_TEST_EMAIL").expect("ADMIN_TEST_EMAIL not set");
    let password = std::env::var("ADMIN_TEST_PASSWORD").expect("ADMIN_TEST_PASSWORD not set");

    let resp = client
        .post(format!("{base}/auth/login"))
        .form(&[("email", email.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("admin login failed");
    assert!(resp.status().is_success(), "admin login rejected");
}

/// Create a product via the dashboard form; blank SKU triggers
/// auto-assignment.
async fn create_product(client: &Client, sku: &str) -> String {
    let base = admin_base_url();
    let slug = format!("it-{}", Uuid::new_v4().simple());

    let resp = client
        .post(format!("{base}/dashboard/products/new"))
        .form(&[
            ("title", "Integration Product"),
            ("slug", slug.as_str()),
            ("sku", sku),
            ("short_description", "created by integration tests"),
            ("detail_description", ""),
            ("price", "12.00"),
            ("popularity", "0"),
            ("category_id", "1"),
            ("is_active", "on"),
        ])
        .send()
        .await
        .expect("product create failed");
    assert!(resp.status().is_success(), "product create rejected");

    slug
}

#[tokio::test]
#[ignore = "Requires running admin dashboard and a configured superuser"]
async fn test_blank_sku_is_assigned_next_numeric_value() {
    let client = client();
    admin_login(&client).await;
    let base = admin_base_url();

    // First create with an explicit high numeric SKU, then with a blank
    // one; the blank one must land exactly one above the maximum.
    create_product(&client, "700").await;
    let slug = create_product(&client, "").await;

    let body = client
        .get(format!("{base}/dashboard/products"))
        .send()
        .await
        .expect("product list failed")
        .text()
        .await
        .expect("failed to read body");

    assert!(body.contains(&slug), "created product should be listed");
    assert!(body.contains("701"), "blank SKU should be assigned max + 1");
}

#[tokio::test]
#[ignore = "Requires running admin dashboard and a configured superuser"]
async fn test_staff_gate_on_dashboard() {
    // An anonymous client must be bounced to the login page.
    let client = client();
    let base = admin_base_url();

    let resp = client
        .get(format!("{base}/dashboard"))
        .send()
        .await
        .expect("dashboard request failed");

    // Redirects are followed, so we land on the login form.
    assert!(resp.status().is_success());
    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Dashboard login"));
}
