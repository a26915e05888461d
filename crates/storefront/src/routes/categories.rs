//! Category listing and browsing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use taffreen_core::ProductSort;

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::routes::views::{CategoryCard, ProductCard};
use crate::state::AppState;

/// Query parameters for category browsing.
#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub sort: Option<String>,
    pub page: Option<u32>,
}

/// All-categories page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub categories: Vec<CategoryCard>,
}

/// Category products page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub category: CategoryCard,
    pub products: Vec<ProductCard>,
    pub sort: &'static str,
    pub page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Display all active categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CategoriesIndexTemplate> {
    let categories = CatalogRepository::new(state.pool())
        .active_categories()
        .await?;

    Ok(CategoriesIndexTemplate {
        categories: categories.iter().map(CategoryCard::from).collect(),
    })
}

/// Display one page of a category's products.
///
/// Unknown `?sort=` values fall back to the default order silently.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<BrowseQuery>,
) -> Result<CategoryShowTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let category = catalog
        .category_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no category '{slug}'")))?;

    let sort = ProductSort::from_query(query.sort.as_deref().unwrap_or_default());
    let page = catalog
        .products_in_category(category.id, sort, query.page.unwrap_or(1))
        .await?;

    Ok(CategoryShowTemplate {
        category: CategoryCard::from(&category),
        products: page.items.iter().map(ProductCard::from).collect(),
        sort: sort.as_query(),
        page: page.number,
        total_pages: page.total_pages,
        has_previous: page.has_previous(),
        has_next: page.has_next(),
    })
}
