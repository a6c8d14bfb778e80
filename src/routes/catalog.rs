//! Catalog lookups used by the product form

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::form::filter_subcategories;
use crate::models::{Category, ProductCodeCheck, Subcategory};
use crate::pricing::DisplayPricing;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories))
        .route("/subcategories", get(subcategories))
        .route("/products/check-code/:code", get(check_product_code))
        .route("/products/:id/pricing", get(product_pricing))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryQuery {
    #[serde(default)]
    pub category_id: String,
}

pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.cache.categories(&state.api).await?;
    Ok(Json(categories.as_ref().clone()))
}

/// Subcategories, narrowed to one category when `categoryId` is given
pub async fn subcategories(
    State(state): State<AppState>,
    Query(query): Query<SubcategoryQuery>,
) -> Result<Json<Vec<Subcategory>>> {
    let all = state.cache.subcategories(&state.api).await?;
    let filtered = filter_subcategories(&all, &query.category_id)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

/// Storefront prices of a stored product
pub async fn product_pricing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DisplayPricing>> {
    let product = state.api.get_product(&id).await?;
    Ok(Json(DisplayPricing::for_product(&product)))
}

/// Whether a product code is still free in the catalog
pub async fn check_product_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ProductCodeCheck>> {
    let check = state.api.check_product_code(code.trim()).await?;
    Ok(Json(check))
}
