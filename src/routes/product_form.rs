//! Product form route handlers.
//!
//! The form state travels with each request; the server keeps none of it.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;

use crate::error::Result;
use crate::form::{transition, FieldChange, FormMode, ProductForm, ProductPayload, ValidationContext};
use crate::models::Product;
use crate::AppState;

/// Routes mounted under `/api/product-form`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", get(new_form))
        .route("/edit/:id", get(edit_form))
        .route("/apply", post(apply))
        .route("/submit", post(submit))
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub form: ProductForm,
    pub change: FieldChange,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub form: ProductForm,
    /// Present when editing a stored product
    #[serde(default)]
    pub product_id: Option<String>,
}

/// Blank form with today's received date
pub async fn new_form() -> Json<ProductForm> {
    Json(ProductForm::new(Local::now().date_naive()))
}

/// Form pre-filled from a stored product
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductForm>> {
    let product = state.api.get_product(&id).await?;
    Ok(Json(ProductForm::from_product(&product, Local::now().date_naive())))
}

/// Apply one field change and return the resulting form
pub async fn apply(Json(req): Json<ApplyRequest>) -> Result<Json<ProductForm>> {
    let next = transition(&req.form, req.change)?;
    Ok(Json(next))
}

/// Validate the form and create or update the product in the catalog API
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<Product>> {
    let mode = if req.product_id.is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };

    let categories = state.cache.categories(&state.api).await?;
    let subcategories = state.cache.subcategories(&state.api).await?;

    let product_code_available = match mode {
        FormMode::Create if !req.form.product_code.is_empty() => {
            let check = state.api.check_product_code(&req.form.product_code).await?;
            tracing::debug!("Product code {}: {}", check.product_code, check.message);
            Some(check.is_available)
        }
        _ => None,
    };

    let ctx = ValidationContext {
        mode,
        categories: &categories,
        subcategories: &subcategories,
        product_code_available,
    };
    let payload = ProductPayload::prepare(&req.form, &ctx)?;

    let product = match req.product_id {
        Some(id) => state.api.update_product(&id, payload).await?,
        None => state.api.create_product(payload).await?,
    };
    Ok(Json(product))
}
