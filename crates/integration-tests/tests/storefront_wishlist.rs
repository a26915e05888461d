//! Integration tests for wishlist behavior.

use taffreen_integration_tests::{client, get_page, register_and_login, storefront_base_url};

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_wishlist_view_before_first_add_is_not_found() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    let resp = client
        .get(format!("{base}/wishlist"))
        .send()
        .await
        .expect("wishlist request failed");

    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_removing_absent_product_leaves_wishlist_unchanged() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    // Create the wishlist by adding product 1.
    let resp = client
        .post(format!("{base}/wishlist/add/1"))
        .send()
        .await
        .expect("wishlist add failed");
    assert!(resp.status().is_success());

    // Removing a product that is not in the set must not error.
    let resp = client
        .post(format!("{base}/wishlist/remove/2"))
        .send()
        .await
        .expect("wishlist remove failed");
    assert!(resp.status().is_success());

    // And the wishlist still holds product 1.
    let body = get_page(&client, "/wishlist").await;
    assert!(body.contains("/wishlist/remove/1"));
    assert!(!body.contains("Your wishlist is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_adding_twice_keeps_single_entry() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    for _ in 0..2 {
        let resp = client
            .post(format!("{base}/wishlist/add/1"))
            .send()
            .await
            .expect("wishlist add failed");
        assert!(resp.status().is_success());
    }

    let body = get_page(&client, "/wishlist").await;
    assert_eq!(
        body.matches("/wishlist/remove/1").count(),
        1,
        "adding twice must not duplicate the wishlist entry"
    );
}
