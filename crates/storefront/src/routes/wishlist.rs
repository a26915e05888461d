//! Wishlist route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::ProductId;

use crate::db::WishlistRepository;
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::session::{self, Flash};
use crate::routes::views::ProductCard;
use crate::state::AppState;

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistTemplate {
    pub products: Vec<ProductCard>,
    pub flash: Option<Flash>,
}

/// Display the user's wishlist.
///
/// A user who has never wishlisted anything gets a 404 rather than an
/// empty list.
#[instrument(skip(state, user, session))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<WishlistTemplate> {
    let products = WishlistRepository::new(state.pool())
        .products(user.id)
        .await?;

    let flash = session::take_flash(&session).await;

    Ok(WishlistTemplate {
        products: products.iter().map(ProductCard::from).collect(),
        flash,
    })
}

/// Add a product to the wishlist.
#[instrument(skip(state, user, session))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    WishlistRepository::new(state.pool())
        .add(user.id, ProductId::new(id))
        .await?;

    session::push_flash(&session, Flash::success("Added to wishlist.")).await;
    Ok(Redirect::to("/wishlist"))
}

/// Remove a product from the wishlist.
///
/// Removing a product that is not in the set is a quiet no-op.
#[instrument(skip(state, user, session))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    WishlistRepository::new(state.pool())
        .remove(user.id, ProductId::new(id))
        .await?;

    session::push_flash(&session, Flash::success("Removed from wishlist.")).await;
    Ok(Redirect::to("/wishlist"))
}
