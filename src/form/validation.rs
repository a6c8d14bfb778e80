//! Submit-time checks for the product form

use crate::models::{Category, Subcategory};
use crate::parse::leading_float;

use super::state::ProductForm;
use super::{FormError, FormMode};

/// What the form is checked against besides its own values
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub mode: FormMode,
    pub categories: &'a [Category],
    pub subcategories: &'a [Subcategory],
    /// Result of the product code availability check; `None` when not checked.
    pub product_code_available: Option<bool>,
}

/// Subcategories of `category_id`, or all of them when no category is chosen
pub fn filter_subcategories<'a>(
    subcategories: &'a [Subcategory],
    category_id: &str,
) -> Vec<&'a Subcategory> {
    subcategories
        .iter()
        .filter(|sub| category_id.is_empty() || sub.belongs_to(category_id))
        .collect()
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Check the form before submission. The first failing check is reported.
pub fn validate(form: &ProductForm, ctx: &ValidationContext<'_>) -> Result<(), FormError> {
    if !ctx.mode.is_edit() {
        if form.product_code.is_empty() {
            return Err(FormError::MissingProductCode);
        }
        match ctx.product_code_available {
            None => return Err(FormError::ProductCodeUnverified),
            Some(false) => return Err(FormError::ProductCodeTaken),
            Some(true) => {}
        }
    }

    if form.images.iter().any(|img| !img.is_valid) {
        return Err(FormError::InvalidImages);
    }

    if !ctx.mode.is_edit() && form.images.is_empty() {
        return Err(FormError::MissingImages);
    }

    match leading_float(&form.base_price) {
        Some(base) if base > 0.0 => {}
        _ => return Err(FormError::InvalidBasePrice),
    }

    if !form.supplier_phone.trim().is_empty() && !is_valid_phone(&form.supplier_phone) {
        return Err(FormError::InvalidSupplierPhone);
    }

    if ctx.categories.is_empty() {
        return Err(FormError::CategoriesUnavailable);
    }

    if form.category_id.is_empty() {
        return Err(FormError::MissingCategory);
    }

    if filter_subcategories(ctx.subcategories, &form.category_id).is_empty() {
        return Err(FormError::NoSubcategories);
    }

    if form.subcategory_id.is_empty() {
        return Err(FormError::MissingSubcategory);
    }

    // Derived pricing in the submitted form may be stale; run the engine again
    form.derive_pricing()?;

    Ok(())
}
