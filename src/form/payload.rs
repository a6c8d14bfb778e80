//! Multipart submission for the product API

use reqwest::multipart::Form;

use crate::upload::FileUpload;

use super::state::ProductForm;
use super::validation::{validate, ValidationContext};
use super::{FormError, FormMode};

/// Fields and files sent to `POST /products` or `PUT /products/{id}`.
///
/// Raw inputs pass through untouched; derived values are recomputed from
/// them and sent as the unrounded numbers in string form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    fields: Vec<(&'static str, String)>,
    images: Vec<FileUpload>,
}

impl ProductPayload {
    /// Validate `form` and build its payload
    pub fn prepare(form: &ProductForm, ctx: &ValidationContext<'_>) -> Result<Self, FormError> {
        validate(form, ctx)?;
        Ok(Self::from_form(form, ctx.mode))
    }

    /// Build the payload without validating
    pub fn from_form(form: &ProductForm, mode: FormMode) -> Self {
        let mut fields: Vec<(&'static str, String)> = Vec::with_capacity(24);
        let total = form.total_available_quantity.to_string();

        if !mode.is_edit() {
            fields.push(("productCode", form.product_code.clone()));
        }
        fields.push(("name", form.name.clone()));
        fields.push(("description", form.description.clone()));

        fields.push(("basePrice", form.base_price.clone()));
        fields.push(("profitMarginPercentage", form.profit_margin_percentage.clone()));
        fields.push(("discountPercentage", form.discount_percentage.clone()));
        // Prices come from the engine, never from the legacy strings in the form
        match form.derive_pricing() {
            Ok(out) => {
                fields.push(("price", out.display_original_price.to_string()));
                fields.push(("offerPrice", out.selling_price.to_string()));
            }
            Err(_) => fields.push(("price", String::new())),
        }

        fields.push(("categoryId", form.category_id.clone()));
        fields.push(("subcategoryId", form.subcategory_id.clone()));
        fields.push(("inStock", form.in_stock.to_string()));
        fields.push(("bestSeller", form.best_seller.to_string()));
        fields.push(("isActive", form.is_active.to_string()));

        if !form.youtube_link.is_empty() {
            fields.push(("youtubeLink", form.youtube_link.clone()));
        }
        fields.push(("stockQuantity", total.clone()));
        if !form.tags.is_empty() {
            fields.push(("tags", form.tags.clone()));
        }

        // The catalog API stores dates as DD-MM-YYYY
        let received_date = form
            .received_date
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_default();
        fields.push(("receivedDate", received_date));
        fields.push(("caseQuantity", form.case_quantity.clone()));
        fields.push(("receivedCase", form.received_case.clone()));
        fields.push(("brandName", form.brand_name.clone()));
        fields.push(("totalAvailableQuantity", total));

        fields.push(("supplierName", form.supplier_name.clone()));
        fields.push(("supplierPhone", form.supplier_phone.clone()));

        let images = form
            .images
            .iter()
            .filter(|img| img.is_valid)
            .map(|img| img.file.clone())
            .collect();

        Self { fields, images }
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Value of a text field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn images(&self) -> &[FileUpload] {
        &self.images
    }

    pub fn into_multipart(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for image in self.images {
            form = form.part("images", image.into_part()?);
        }
        Ok(form)
    }
}
