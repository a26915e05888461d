//! Order history route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session::{self, Flash};
use crate::state::AppState;

/// Order display data for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub title: String,
    pub slug: String,
    pub quantity: i32,
    pub price: String,
    pub status: &'static str,
    pub ordered_at: String,
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
    pub flash: Option<Flash>,
}

/// Display the user's order history, newest first.
#[instrument(skip(state, user, session))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<OrdersTemplate> {
    let orders = OrderRepository::new(state.pool()).history(user.id).await?;

    let flash = session::take_flash(&session).await;

    Ok(OrdersTemplate {
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
