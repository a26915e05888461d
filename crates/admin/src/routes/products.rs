//! Product management route handlers.
//!
//! The list page needs staff; create/edit/delete need superuser.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::{CategoryId, ProductId};

use crate::db::products::ProductInput;
use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::{RequireStaff, RequireSuperuser};
use crate::models::session::{self, Flash};
use crate::models::{CategoryOption, ProductRecord};
use crate::state::AppState;

/// Product form data. Checkboxes are absent when unchecked; price arrives
/// as text so a malformed value can be surfaced inline.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub title: String,
    pub slug: String,
    pub sku: String,
    pub short_description: String,
    pub detail_description: String,
    pub price: String,
    pub popularity: Option<i32>,
    pub category_id: i32,
    pub is_active: Option<String>,
    pub is_featured: Option<String>,
}

/// Product row display data for the list page.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub sku: String,
    pub price: String,
    pub popularity: i32,
    pub is_active: bool,
    pub is_featured: bool,
}

impl From<&ProductRecord> for ProductRow {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id.as_i32(),
            title: product.title.clone(),
            slug: product.slug.clone(),
            sku: product.sku.clone(),
            price: format!("${:.2}", product.price),
            popularity: product.popularity,
            is_active: product.is_active,
            is_featured: product.is_featured,
        }
    }
}

/// Category selector option for templates.
#[derive(Debug, Clone)]
pub struct CategoryChoice {
    pub id: i32,
    pub title: String,
    pub selected: bool,
}

/// Editable form state echoed back into the form template.
#[derive(Debug, Clone, Default)]
pub struct ProductFormView {
    pub title: String,
    pub slug: String,
    pub sku: String,
    pub short_description: String,
    pub detail_description: String,
    pub price: String,
    pub popularity: i32,
    pub is_active: bool,
    pub is_featured: bool,
}

impl From<&ProductRecord> for ProductFormView {
    fn from(product: &ProductRecord) -> Self {
        Self {
            title: product.title.clone(),
            slug: product.slug.clone(),
            sku: product.sku.clone(),
            short_description: product.short_description.clone(),
            detail_description: product.detail_description.clone(),
            price: product.price.to_string(),
            popularity: product.popularity,
            is_active: product.is_active,
            is_featured: product.is_featured,
        }
    }
}

impl From<&ProductForm> for ProductFormView {
    fn from(form: &ProductForm) -> Self {
        Self {
            title: form.title.clone(),
            slug: form.slug.clone(),
            sku: form.sku.clone(),
            short_description: form.short_description.clone(),
            detail_description: form.detail_description.clone(),
            price: form.price.clone(),
            popularity: form.popularity.unwrap_or(0),
            is_active: form.is_active.is_some(),
            is_featured: form.is_featured.is_some(),
        }
    }
}

/// Product list page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductRow>,
    pub is_superuser: bool,
    pub flash: Option<Flash>,
}

/// Product create page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct ProductNewTemplate {
    pub form: ProductFormView,
    pub categories: Vec<CategoryChoice>,
    pub error: Option<String>,
}

/// Product edit page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub id: i32,
    pub form: ProductFormView,
    pub categories: Vec<CategoryChoice>,
    pub error: Option<String>,
}

/// Build the category selector, marking the selected id.
fn category_choices(categories: &[CategoryOption], selected: Option<i32>) -> Vec<CategoryChoice> {
    categories
        .iter()
        .map(|c| CategoryChoice {
            id: c.id.as_i32(),
            title: c.title.clone(),
            selected: selected == Some(c.id.as_i32()),
        })
        .collect()
}

/// Validate a product form into a repository input.
fn parse_form(form: &ProductForm) -> std::result::Result<ProductInput, String> {
    let title = form.title.trim();
    let slug = form.slug.trim();
    if title.is_empty() || slug.is_empty() {
        return Err("Title and slug are required.".to_owned());
    }

    let Ok(price) = form.price.trim().parse::<Decimal>() else {
        return Err("Price must be a number.".to_owned());
    };
    if price < Decimal::ZERO {
        return Err("Price cannot be negative.".to_owned());
    }

    Ok(ProductInput {
        title: title.to_owned(),
        slug: slug.to_owned(),
        sku: form.sku.clone(),
        short_description: form.short_description.trim().to_owned(),
        detail_description: form.detail_description.trim().to_owned(),
        price,
        popularity: form.popularity.unwrap_or(0),
        category_id: CategoryId::new(form.category_id),
        is_active: form.is_active.is_some(),
        is_featured: form.is_featured.is_some(),
    })
}

/// List all products.
#[instrument(skip(state, admin, session))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(admin): RequireStaff,
    session: Session,
) -> Result<ProductsIndexTemplate> {
    let products = ProductRepository::new(state.pool()).list().await?;

    let flash = session::take_flash(&session).await;

    Ok(ProductsIndexTemplate {
        products: products.iter().map(ProductRow::from).collect(),
        is_superuser: admin.is_superuser,
        flash,
    })
}

/// Display the product create form.
#[instrument(skip(state, _admin))]
pub async fn new_page(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
) -> Result<ProductNewTemplate> {
    let categories = ProductRepository::new(state.pool())
        .category_options()
        .await?;

    Ok(ProductNewTemplate {
        form: ProductFormView::default(),
        categories: category_choices(&categories, None),
        error: None,
    })
}

/// Create a product.
///
/// A blank SKU gets the next numeric SKU; see the repository for the
/// (documented, unsynchronized) counter semantics.
#[instrument(skip(state, _admin, session, form))]
pub async fn create(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let repo = ProductRepository::new(state.pool());

    let input = match parse_form(&form) {
        Ok(input) => input,
        Err(message) => {
            let categories = repo.category_options().await?;
            let page = ProductNewTemplate {
                form: ProductFormView::from(&form),
                categories: category_choices(&categories, Some(form.category_id)),
                error: Some(message),
            };
            return Ok(page.into_response());
        }
    };

    match repo.create(&input).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, sku = %product.sku, "Product created");
            session::push_flash(
                &session,
                Flash::success(format!("Product '{}' created.", product.title)),
            )
            .await;
            Ok(Redirect::to("/dashboard/products").into_response())
        }
        Err(RepositoryError::Conflict(_)) => {
            let categories = repo.category_options().await?;
            let page = ProductNewTemplate {
                form: ProductFormView::from(&form),
                categories: category_choices(&categories, Some(form.category_id)),
                error: Some("A product with this slug already exists.".to_owned()),
            };
            Ok(page.into_response())
        }
        Err(e) => Err(AppError::from(e)),
    }
}

/// Display the product edit form.
#[instrument(skip(state, _admin))]
pub async fn edit_page(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Path(id): Path<i32>,
) -> Result<ProductEditTemplate> {
    let repo = ProductRepository::new(state.pool());

    let product = repo
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no product {id}")))?;

    let categories = repo.category_options().await?;

    Ok(ProductEditTemplate {
        id,
        form: ProductFormView::from(&product),
        categories: category_choices(&categories, Some(product.category_id.as_i32())),
        error: None,
    })
}

/// Apply a product edit.
#[instrument(skip(state, _admin, session, form))]
pub async fn edit(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let repo = ProductRepository::new(state.pool());

    let input = match parse_form(&form) {
        Ok(input) => input,
        Err(message) => {
            let categories = repo.category_options().await?;
            let page = ProductEditTemplate {
                id,
                form: ProductFormView::from(&form),
                categories: category_choices(&categories, Some(form.category_id)),
                error: Some(message),
            };
            return Ok(page.into_response());
        }
    };

    match repo.update(ProductId::new(id), &input).await {
        Ok(()) => {
            session::push_flash(
                &session,
                Flash::success(format!("Product '{}' updated.", input.title)),
            )
            .await;
            Ok(Redirect::to("/dashboard/products").into_response())
        }
        Err(RepositoryError::Conflict(_)) => {
            let categories = repo.category_options().await?;
            let page = ProductEditTemplate {
                id,
                form: ProductFormView::from(&form),
                categories: category_choices(&categories, Some(form.category_id)),
                error: Some("A product with this slug already exists.".to_owned()),
            };
            Ok(page.into_response())
        }
        Err(e) => Err(AppError::from(e)),
    }
}

/// Delete a product.
#[instrument(skip(state, _admin, session))]
pub async fn delete(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;

    tracing::info!(product_id = id, "Product deleted");
    session::push_flash(&session, Flash::success("Product deleted.")).await;
    Ok(Redirect::to("/dashboard/products"))
}
