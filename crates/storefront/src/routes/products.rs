//! Product detail and review route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::{CatalogRepository, ReviewRepository};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::catalog::Product;
use crate::models::session::{self, Flash};
use crate::routes::views::ProductCard;
use crate::state::AppState;

/// How many related products the detail page shows.
const RELATED_PRODUCTS: i64 = 4;

/// Full product display data for the detail page.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub title: String,
    pub slug: String,
    pub sku: String,
    pub short_description: String,
    pub detail_description: String,
    pub price: String,
    pub is_active: bool,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            slug: product.slug.clone(),
            sku: product.sku.clone(),
            short_description: product.short_description.clone(),
            detail_description: product.detail_description.clone(),
            price: filters::price(product.price),
            is_active: product.is_active,
        }
    }
}

/// Review display data for templates.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub author: String,
    pub rating: i32,
    pub comment: String,
    pub posted_at: String,
}

/// Review form data.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: i32,
    pub comment: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product_id: i32,
    pub product: ProductDetail,
    pub reviews: Vec<ReviewView>,
    pub average_rating: String,
    pub related: Vec<ProductCard>,
    pub signed_in: bool,
    pub flash: Option<Flash>,
}

/// Display a product detail page.
#[instrument(skip(state, user, session))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let product = catalog
        .product_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no product '{slug}'")))?;

    let reviews_repo = ReviewRepository::new(state.pool());
    let reviews = reviews_repo.for_product(product.id).await?;
    let average = reviews_repo.average_rating(product.id).await?;

    let related = catalog
        .related_products(product.category_id, product.id, RELATED_PRODUCTS)
        .await?;

    let flash = session::take_flash(&session).await;

    Ok(ProductShowTemplate {
        product_id: product.id.as_i32(),
        product: ProductDetail::from(&product),
        reviews: reviews
            .iter()
            .map(|r| ReviewView {
                author: r.author.clone(),
                rating: r.rating,
                comment: r.comment.clone(),
                posted_at: filters::date(r.posted_at),
            })
            .collect(),
        average_rating: filters::rating(average),
        related: related.iter().map(ProductCard::from).collect(),
        signed_in: user.is_some(),
        flash,
    })
}

/// Add a review to a product.
#[instrument(skip(state, user, session, form))]
pub async fn review(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
    Path(slug): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Redirect> {
    if !(1..=5).contains(&form.rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_owned(),
        ));
    }

    let comment = form.comment.trim();
    if comment.is_empty() {
        return Err(AppError::Validation("comment cannot be empty".to_owned()));
    }

    let product = CatalogRepository::new(state.pool())
        .product_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no product '{slug}'")))?;

    ReviewRepository::new(state.pool())
        .create(user.id, product.id, form.rating, comment)
        .await?;

    session::push_flash(&session, Flash::success("Review submitted.")).await;
    Ok(Redirect::to(&format!("/product/{slug}")))
}
