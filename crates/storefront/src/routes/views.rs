//! View structs shared by several page templates.
//!
//! Prices and dates are pre-formatted into strings here so templates only
//! interpolate.

use crate::filters;
use crate::models::address::Address;
use crate::models::catalog::{Category, Product};

/// Category display data for templates.
#[derive(Debug, Clone)]
pub struct CategoryCard {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl From<&Category> for CategoryCard {
    fn from(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
        }
    }
}

/// Product display data for listing grids.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub price: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            title: product.title.clone(),
            slug: product.slug.clone(),
            short_description: product.short_description.clone(),
            price: filters::price(product.price),
        }
    }
}

/// Address display data for templates.
#[derive(Debug, Clone)]
pub struct AddressView {
    pub id: i32,
    pub locality: String,
    pub city: String,
    pub state: String,
}

impl From<&Address> for AddressView {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.as_i32(),
            locality: address.locality.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
        }
    }
}
