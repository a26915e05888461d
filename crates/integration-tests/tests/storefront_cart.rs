//! Integration tests for cart and checkout behavior.
//!
//! Requires a running storefront with migrated, seeded data; see the
//! crate docs. Run with `cargo test -- --ignored`.

use taffreen_integration_tests::{client, get_page, register_and_login, storefront_base_url};

/// Seeded product known to exist (see `taffreen-cli seed`).
const SEEDED_PRODUCT_ID: i32 = 1;

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_add_same_product_twice_yields_one_line_quantity_two() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    for _ in 0..2 {
        let resp = client
            .get(format!("{base}/cart/add?prod_id={SEEDED_PRODUCT_ID}"))
            .send()
            .await
            .expect("add to cart failed");
        assert!(resp.status().is_success());
    }

    let body = get_page(&client, "/cart").await;

    // One line with quantity 2, not two lines with quantity 1.
    assert_eq!(body.matches("/cart/remove/").count(), 1, "expected one cart line");
    assert!(
        body.contains("/cart/plus/"),
        "expected quantity controls on the single line"
    );
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_decrement_quantity_one_deletes_line() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    client
        .get(format!("{base}/cart/add?prod_id={SEEDED_PRODUCT_ID}"))
        .send()
        .await
        .expect("add to cart failed");

    // The line id is embedded in the minus link.
    let body = get_page(&client, "/cart").await;
    let line_id = body
        .split("/cart/minus/")
        .nth(1)
        .and_then(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<i64>().ok()
        })
        .expect("cart page should contain a minus link");

    let resp = client
        .get(format!("{base}/cart/minus/{line_id}"))
        .send()
        .await
        .expect("decrement failed");
    assert!(resp.status().is_success());

    let body = get_page(&client, "/cart").await;
    assert!(
        body.contains("Your cart is empty"),
        "decrementing a quantity-1 line should delete it"
    );
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_checkout_places_one_order_per_line_and_empties_cart() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    // Two distinct seeded products.
    for prod_id in [1, 2] {
        let resp = client
            .get(format!("{base}/cart/add?prod_id={prod_id}"))
            .send()
            .await
            .expect("add to cart failed");
        assert!(resp.status().is_success());
    }

    // Checkout needs a saved address.
    let resp = client
        .post(format!("{base}/account/addresses/new"))
        .form(&[("locality", "12 Harbor Lane"), ("city", "Portsmouth"), ("state", "NH")])
        .send()
        .await
        .expect("address create failed");
    assert!(resp.status().is_success());

    // Address radio values appear on the checkout page; grab one.
    let checkout = get_page(&client, "/checkout").await;
    let address_id = checkout
        .split("name=\"address_id\" value=\"")
        .nth(1)
        .and_then(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<i64>().ok()
        })
        .expect("checkout page should list an address");

    let resp = client
        .post(format!("{base}/checkout"))
        .form(&[("address_id", address_id.to_string())])
        .send()
        .await
        .expect("checkout failed");
    assert!(resp.status().is_success());

    // Exactly two orders, one per distinct product.
    let orders = get_page(&client, "/orders").await;
    assert_eq!(orders.matches("Placed").count(), 2, "expected two placed orders");

    // And the cart is empty afterwards.
    let cart = get_page(&client, "/cart").await;
    assert!(cart.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_checkout_with_empty_cart_is_a_no_op() {
    let client = client();
    register_and_login(&client).await;
    let base = storefront_base_url();

    let resp = client
        .post(format!("{base}/account/addresses/new"))
        .form(&[("locality", "5 Elm St"), ("city", "Dover"), ("state", "NH")])
        .send()
        .await
        .expect("address create failed");
    assert!(resp.status().is_success());

    let checkout = get_page(&client, "/checkout").await;
    assert!(checkout.contains("Your cart is empty"));

    let orders = get_page(&client, "/orders").await;
    assert!(orders.contains("You have no orders yet"));
}
