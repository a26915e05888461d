//! Integration tests for newsletter subscription conflicts.

use taffreen_integration_tests::{client, storefront_base_url, unique_email};

#[tokio::test]
#[ignore = "Requires running storefront and migrated database"]
async fn test_duplicate_subscription_is_rejected() {
    let client = client();
    let base = storefront_base_url();
    let email = unique_email();

    // First subscription succeeds and lands back on the home page.
    let resp = client
        .post(format!("{base}/subscribe"))
        .form(&[("email", email.as_str())])
        .send()
        .await
        .expect("subscribe failed");
    assert!(resp.status().is_success());
    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Thanks for subscribing"));

    // Second subscription with the same email is rejected inline.
    let resp = client
        .post(format!("{base}/subscribe"))
        .form(&[("email", email.as_str())])
        .send()
        .await
        .expect("subscribe failed");
    assert!(resp.status().is_success());
    let body = resp.text().await.expect("failed to read body");
    assert!(
        body.contains("already subscribed"),
        "duplicate subscription should be rejected, not silently accepted"
    );
}

#[tokio::test]
#[ignore = "Requires running storefront and migrated database"]
async fn test_malformed_subscription_email_is_rejected() {
    let client = client();
    let base = storefront_base_url();

    let resp = client
        .post(format!("{base}/subscribe"))
        .form(&[("email", "not-an-email")])
        .send()
        .await
        .expect("subscribe failed");
    assert!(resp.status().is_success());
    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("valid email address"));
}
