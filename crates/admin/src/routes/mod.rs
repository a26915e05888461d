//! HTTP route handlers for the admin dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//! GET|POST /auth/login                - Dashboard login (staff only)
//! POST /auth/logout                   - Logout
//!
//! # Staff
//! GET  /dashboard                     - Overview with entity counts
//! GET  /dashboard/products            - Product list
//!
//! # Superuser
//! GET  /dashboard/users               - User list
//! GET|POST /dashboard/users/{id}/edit     - Edit a user
//! POST /dashboard/users/{id}/delete       - Delete a user
//! GET|POST /dashboard/users/{id}/password - Force-change a password
//! GET|POST /dashboard/products/new        - Create a product
//! GET|POST /dashboard/products/{id}/edit  - Edit a product
//! POST /dashboard/products/{id}/delete    - Delete a product
//! ```

pub mod auth;
pub mod dashboard;
pub mod products;
pub mod users;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the user management routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route("/{id}/edit", get(users::edit_page).post(users::edit))
        .route("/{id}/delete", post(users::delete))
        .route(
            "/{id}/password",
            get(users::password_page).post(users::change_password),
        )
}

/// Create the product management routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/new", get(products::new_page).post(products::create))
        .route("/{id}/edit", get(products::edit_page).post(products::edit))
        .route("/{id}/delete", post(products::delete))
}

/// Create all routes for the admin dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .nest("/auth", auth_routes())
        .route("/dashboard", get(dashboard::index))
        .nest("/dashboard/users", user_routes())
        .nest("/dashboard/products", product_routes())
}
