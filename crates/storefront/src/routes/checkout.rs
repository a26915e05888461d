//! Checkout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::AddressId;

use crate::db::{AddressRepository, CartRepository, OrderRepository};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::cart::CartTotals;
use crate::models::session::{self, Flash};
use crate::routes::cart::CartItemView;
use crate::routes::views::AddressView;
use crate::state::AppState;

/// Checkout form data: which saved address to ship to.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub address_id: i32,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub addresses: Vec<AddressView>,
    pub flash: Option<Flash>,
}

/// Display the checkout page: current cart lines, grand total, and the
/// user's addresses to choose from.
#[instrument(skip(state, user, session))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<CheckoutTemplate> {
    let items = CartRepository::new(state.pool())
        .items_for_user(user.id)
        .await?;
    let totals = CartTotals::compute(&items);

    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    let flash = session::take_flash(&session).await;

    Ok(CheckoutTemplate {
        items: items.iter().map(CartItemView::from).collect(),
        total: filters::price(totals.total),
        addresses: addresses.iter().map(AddressView::from).collect(),
        flash,
    })
}

/// Place the order.
///
/// Drains the cart read at this moment into one order per line, in a
/// single transaction against the selected address. An address that does
/// not belong to the requester 404s; an empty cart is a no-op.
#[instrument(skip(state, user, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Redirect> {
    let placed = OrderRepository::new(state.pool())
        .place_from_cart(user.id, AddressId::new(form.address_id))
        .await?;

    if placed == 0 {
        session::push_flash(&session, Flash::error("Your cart is empty.")).await;
        return Ok(Redirect::to("/cart"));
    }

    tracing::info!(orders = placed, "Checkout complete");
    session::push_flash(&session, Flash::success("Order placed.")).await;
    Ok(Redirect::to("/orders"))
}
