//! Cart route handlers.
//!
//! Every mutation redirects back to the cart page; ownership is enforced
//! in the repository, so another user's line id 404s without revealing
//! whether the line exists.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::{CartLineId, ProductId};

use crate::db::{AddressRepository, CartRepository};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::cart::{CartItem, CartTotals};
use crate::models::session::{self, Flash};
use crate::routes::views::AddressView;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub quantity: i32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.as_i32(),
            title: item.title.clone(),
            slug: item.slug.clone(),
            quantity: item.quantity,
            price: filters::price(item.price),
            line_total: filters::price(item.line_total()),
        }
    }
}

/// Add-to-cart query parameters.
#[derive(Debug, Deserialize)]
pub struct AddQuery {
    pub prod_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub addresses: Vec<AddressView>,
    pub flash: Option<Flash>,
}

/// Display the cart page with totals.
///
/// An empty cart renders with all totals at zero.
#[instrument(skip(state, user, session))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<CartShowTemplate> {
    let items = CartRepository::new(state.pool())
        .items_for_user(user.id)
        .await?;
    let totals = CartTotals::compute(&items);

    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    let flash = session::take_flash(&session).await;

    Ok(CartShowTemplate {
        items: items.iter().map(CartItemView::from).collect(),
        subtotal: filters::price(totals.subtotal),
        shipping: filters::price(totals.shipping),
        total: filters::price(totals.total),
        addresses: addresses.iter().map(AddressView::from).collect(),
        flash,
    })
}

/// Add a product to the cart (`?prod_id=`).
///
/// Adding a product already in the cart increments its quantity rather
/// than creating a second line.
#[instrument(skip(state, user))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<AddQuery>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .add_or_increment(user.id, ProductId::new(query.prod_id))
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Increment a cart line.
#[instrument(skip(state, user))]
pub async fn plus(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .increment(CartLineId::new(id), user.id)
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Decrement a cart line, deleting it at quantity 1.
#[instrument(skip(state, user))]
pub async fn minus(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .decrement_or_delete(CartLineId::new(id), user.id)
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Remove a cart line outright.
#[instrument(skip(state, user, session))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .remove(CartLineId::new(id), user.id)
        .await?;

    session::push_flash(&session, Flash::success("Product removed from cart.")).await;
    Ok(Redirect::to("/cart"))
}
