//! Account and profile route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::AddressId;

use crate::db::{AddressRepository, OrderRepository};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session::{self, Flash};
use crate::routes::orders::OrderView;
use crate::routes::views::AddressView;
use crate::state::AppState;

/// Address form data.
#[derive(Debug, Deserialize)]
pub struct AddressForm {
    pub locality: String,
    pub city: String,
    pub state: String,
}

/// Profile page template: the user's addresses and order history.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct ProfileTemplate {
    pub name: String,
    pub email: String,
    pub addresses: Vec<AddressView>,
    pub orders: Vec<OrderView>,
    pub flash: Option<Flash>,
}

/// New-address form template.
#[derive(Template, WebTemplate)]
#[template(path = "account/address_new.html")]
pub struct AddressNewTemplate {
    pub error: Option<String>,
    pub locality: String,
    pub city: String,
    pub state: String,
}

/// Display the profile page.
#[instrument(skip(state, user, session))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<ProfileTemplate> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;
    let orders = OrderRepository::new(state.pool()).history(user.id).await?;

    let flash = session::take_flash(&session).await;

    Ok(ProfileTemplate {
        name: user.name,
        email: user.email.into_inner(),
        addresses: addresses.iter().map(AddressView::from).collect(),
        orders: orders
            .iter()
            .map(|o| OrderView {
                title: o.title.clone(),
                slug: o.slug.clone(),
                quantity: o.quantity,
                price: filters::price(o.price),
                status: o.status.label(),
                ordered_at: filters::date(o.ordered_at),
            })
            .collect(),
        flash,
    })
}

/// Display the new-address form.
#[instrument(skip_all)]
pub async fn new_address(RequireAuth(_user): RequireAuth) -> AddressNewTemplate {
    AddressNewTemplate {
        error: None,
        locality: String::new(),
        city: String::new(),
        state: String::new(),
    }
}

/// Create a new address.
///
/// Blank fields re-render the form with an inline error instead of
/// persisting a useless address.
#[instrument(skip(state, user, session, form))]
pub async fn create_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<AddressForm>,
) -> Result<Response> {
    let locality = form.locality.trim();
    let city = form.city.trim();
    let address_state = form.state.trim();

    if locality.is_empty() || city.is_empty() || address_state.is_empty() {
        let page = AddressNewTemplate {
            error: Some("All fields are required.".to_owned()),
            locality: locality.to_owned(),
            city: city.to_owned(),
            state: address_state.to_owned(),
        };
        return Ok(page.into_response());
    }

    AddressRepository::new(state.pool())
        .create(user.id, locality, city, address_state)
        .await?;

    session::push_flash(&session, Flash::success("New address added successfully.")).await;
    Ok(Redirect::to("/account").into_response())
}

/// Remove an address.
#[instrument(skip(state, user, session))]
pub async fn delete_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    AddressRepository::new(state.pool())
        .delete(AddressId::new(id), user.id)
        .await?;

    session::push_flash(&session, Flash::success("Address removed.")).await;
    Ok(Redirect::to("/account"))
}
