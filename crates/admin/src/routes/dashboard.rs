//! Dashboard overview route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::StatsRepository;
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::models::session::{self, Flash};
use crate::state::AppState;

/// Dashboard overview template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub admin_name: String,
    pub is_superuser: bool,
    pub user_count: i64,
    pub product_count: i64,
    pub order_count: i64,
    pub subscription_count: i64,
    pub flash: Option<Flash>,
}

/// Display the dashboard overview with entity counts.
#[instrument(skip(state, admin, session))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(admin): RequireStaff,
    session: Session,
) -> Result<DashboardTemplate> {
    let counts = StatsRepository::new(state.pool()).counts().await?;

    let flash = session::take_flash(&session).await;

    Ok(DashboardTemplate {
        admin_name: admin.name,
        is_superuser: admin.is_superuser,
        user_count: counts.users,
        product_count: counts.products,
        order_count: counts.orders,
        subscription_count: counts.subscriptions,
        flash,
    })
}
