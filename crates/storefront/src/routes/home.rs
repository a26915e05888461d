//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::{CatalogRepository, WishlistRepository};
use crate::error::Result;
use crate::middleware::OptionalAuth;
use crate::models::session::{self, CurrentUser, Flash};
use crate::routes::views::{CategoryCard, ProductCard};
use crate::state::AppState;

/// How many featured categories the home page shows.
const FEATURED_CATEGORIES: i64 = 3;
/// How many featured products the home page shows.
const FEATURED_PRODUCTS: i64 = 8;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryCard>,
    pub products: Vec<ProductCard>,
    pub wishlist_count: i64,
    pub signed_in: bool,
    pub flash: Option<Flash>,
    /// Inline error for the subscription form, if the last submit failed.
    pub subscribe_error: Option<String>,
    /// The submitted email echoed back into the form.
    pub subscribe_email: String,
}

/// Build the home page context.
///
/// Shared with the subscribe handler, which re-renders the home page with
/// an inline form error on failure.
pub(crate) async fn build_home(
    state: &AppState,
    user: Option<&CurrentUser>,
    flash: Option<Flash>,
    subscribe_error: Option<String>,
    subscribe_email: String,
) -> Result<HomeTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let categories = catalog.featured_categories(FEATURED_CATEGORIES).await?;
    let products = catalog.featured_products(FEATURED_PRODUCTS).await?;

    let wishlist_count = match user {
        Some(user) => WishlistRepository::new(state.pool()).count(user.id).await?,
        None => 0,
    };

    Ok(HomeTemplate {
        categories: categories.iter().map(CategoryCard::from).collect(),
        products: products.iter().map(ProductCard::from).collect(),
        wishlist_count,
        signed_in: user.is_some(),
        flash,
        subscribe_error,
        subscribe_email,
    })
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<HomeTemplate> {
    let flash = session::take_flash(&session).await;
    build_home(&state, user.as_ref(), flash, None, String::new()).await
}
