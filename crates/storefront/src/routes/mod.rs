//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured catalog + subscribe form)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /product/{slug}         - Product detail with reviews
//! POST /product/{slug}/review  - Add a review (auth)
//! GET  /categories             - All active categories
//! GET  /category/{slug}        - Category products (?sort=&page=)
//!
//! # Cart (auth)
//! GET|POST /cart/add           - Add to cart (?prod_id=)
//! GET  /cart                   - Cart page with totals
//! GET  /cart/plus/{id}         - Increment a line
//! GET  /cart/minus/{id}        - Decrement a line (deletes at quantity 1)
//! GET  /cart/remove/{id}       - Remove a line
//!
//! # Checkout & orders (auth)
//! GET|POST /checkout           - Checkout against a saved address
//! GET  /orders                 - Order history
//!
//! # Wishlist (auth)
//! GET  /wishlist               - View wishlist
//! POST /wishlist/add/{id}      - Add a product
//! POST /wishlist/remove/{id}   - Remove a product
//!
//! # Account
//! GET  /account                - Profile: addresses + orders (auth)
//! GET|POST /account/addresses/new       - Add address (auth)
//! POST /account/addresses/{id}/delete   - Remove address (auth)
//! GET|POST /auth/register      - Registration
//! GET|POST /auth/login         - Login
//! POST /auth/logout            - Logout
//!
//! # Content
//! GET  /blog                   - Blog posts
//! GET|POST /contact            - Contact form
//! GET  /contact/success        - Contact success page
//! POST /subscribe              - Email subscription
//! ```

pub mod account;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod categories;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod newsletter;
pub mod orders;
pub mod products;
pub mod views;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", get(cart::add).post(cart::add))
        .route("/plus/{id}", get(cart::plus))
        .route("/minus/{id}", get(cart::minus))
        .route("/remove/{id}", get(cart::remove))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route(
            "/addresses/new",
            get(account::new_address).post(account::create_address),
        )
        .route("/addresses/{id}/delete", post(account::delete_address))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/add/{id}", post(wishlist::add))
        .route("/remove/{id}", post(wishlist::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/product/{slug}", get(products::show))
        .route("/product/{slug}/review", post(products::review))
        .route("/categories", get(categories::index))
        .route("/category/{slug}", get(categories::show))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout & orders
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .route("/orders", get(orders::index))
        // Wishlist
        .nest("/wishlist", wishlist_routes())
        // Account
        .nest("/account", account_routes())
        .nest("/auth", auth_routes())
        // Content
        .route("/blog", get(blog::index))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/contact/success", get(contact::success))
        .route("/subscribe", post(newsletter::subscribe))
}
