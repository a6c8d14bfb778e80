//! Product form state and its transition function

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::inventory::{compute_total_quantity, QuantitySync};
use crate::models::{Product, ProductImage};
use crate::parse::leading_int;
use crate::pricing::{compute_pricing, PricingError, PricingOutput};
use crate::upload::FileUpload;

use super::images::{ImageUpload, MAX_IMAGES};
use super::FormError;

const DEFAULT_PROFIT_MARGIN: &str = "65";
const DEFAULT_DISCOUNT: &str = "81";
const DEFAULT_STOCK_QUANTITY: u64 = 300;
const DEFAULT_CASE_QUANTITY: &str = "100";
const DEFAULT_RECEIVED_CASE: &str = "3";
const MAX_PRODUCT_CODE_LEN: usize = 20;

/// Every value the product form holds.
///
/// Text fields keep exactly what was typed; the derived values (`pricing`,
/// legacy `price`/`offer_price`, `total_available_quantity`) are rewritten by
/// [`ProductForm::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub product_code: String,
    pub name: String,
    pub description: String,

    // Legacy price fields, string form of the derived prices
    pub price: String,
    pub offer_price: String,

    pub base_price: String,
    pub profit_margin_percentage: String,
    pub discount_percentage: String,
    pub pricing: PricingOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_error: Option<PricingError>,

    pub category_id: String,
    pub subcategory_id: String,
    pub in_stock: bool,
    pub best_seller: bool,
    pub tags: String,
    #[serde(default)]
    pub images: Vec<ImageUpload>,
    #[serde(default)]
    pub existing_images: Vec<ProductImage>,

    pub is_active: bool,
    pub youtube_link: String,
    pub stock_quantity: String,

    pub received_date: Option<NaiveDate>,
    pub case_quantity: String,
    pub received_case: String,
    pub brand_name: String,
    pub total_available_quantity: u64,
    #[serde(default)]
    pub quantity_sync: QuantitySync,

    pub supplier_name: String,
    pub supplier_phone: String,
}

/// One edit to the product form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    ProductCode(String),
    Name(String),
    Description(String),
    BasePrice(String),
    ProfitMarginPercentage(String),
    DiscountPercentage(String),
    Category(String),
    Subcategory(String),
    Tags(String),
    YoutubeLink(String),
    StockQuantity(String),
    ReceivedDate(Option<NaiveDate>),
    CaseQuantity(String),
    ReceivedCase(String),
    BrandName(String),
    TotalAvailableQuantity(String),
    SupplierName(String),
    SupplierPhone(String),
    InStock(bool),
    BestSeller(bool),
    IsActive(bool),
    AddImages(Vec<FileUpload>),
    RemoveImage(usize),
}

impl ProductForm {
    /// Blank form for a new product
    pub fn new(today: NaiveDate) -> Self {
        Self {
            product_code: String::new(),
            name: String::new(),
            description: String::new(),
            price: String::new(),
            offer_price: String::new(),
            base_price: String::new(),
            profit_margin_percentage: DEFAULT_PROFIT_MARGIN.to_string(),
            discount_percentage: DEFAULT_DISCOUNT.to_string(),
            pricing: PricingOutput::ZERO,
            pricing_error: None,
            category_id: String::new(),
            subcategory_id: String::new(),
            in_stock: true,
            best_seller: false,
            tags: String::new(),
            images: Vec::new(),
            existing_images: Vec::new(),
            is_active: true,
            youtube_link: String::new(),
            stock_quantity: DEFAULT_STOCK_QUANTITY.to_string(),
            received_date: Some(today),
            case_quantity: DEFAULT_CASE_QUANTITY.to_string(),
            received_case: DEFAULT_RECEIVED_CASE.to_string(),
            brand_name: String::new(),
            total_available_quantity: DEFAULT_STOCK_QUANTITY,
            quantity_sync: QuantitySync::Auto,
            supplier_name: String::new(),
            supplier_phone: String::new(),
        }
    }

    /// Form pre-filled from a stored product for editing
    pub fn from_product(product: &Product, today: NaiveDate) -> Self {
        let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        let non_zero = |v: f64| if v != 0.0 { v.to_string() } else { String::new() };

        let stock_quantity = product
            .stock_quantity
            .filter(|q| *q > 0)
            .or(product.total_available_quantity)
            .map(|q| q.to_string())
            .unwrap_or_else(|| DEFAULT_STOCK_QUANTITY.to_string());

        let received_date = product
            .received_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%d-%m-%Y").ok())
            .unwrap_or(today);

        let mut form = Self {
            product_code: product.product_code.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: non_zero(product.price),
            offer_price: product.offer_price.map(non_zero).unwrap_or_default(),
            base_price: number(product.base_price),
            profit_margin_percentage: product
                .profit_margin_percentage
                .map(|v| v.to_string())
                .unwrap_or_else(|| DEFAULT_PROFIT_MARGIN.to_string()),
            discount_percentage: product
                .discount_percentage
                .map(|v| v.to_string())
                .unwrap_or_else(|| DEFAULT_DISCOUNT.to_string()),
            pricing: PricingOutput::ZERO,
            pricing_error: None,
            category_id: product
                .category_id
                .as_ref()
                .map(|c| c.id().to_string())
                .unwrap_or_default(),
            subcategory_id: product
                .subcategory_id
                .as_ref()
                .map(|c| c.id().to_string())
                .unwrap_or_default(),
            in_stock: product.in_stock,
            best_seller: product.best_seller,
            tags: product.tags.join(", "),
            images: Vec::new(),
            existing_images: product.images.clone(),
            is_active: product.is_active.unwrap_or(true),
            youtube_link: product.youtube_link.clone().unwrap_or_default(),
            stock_quantity,
            received_date: Some(received_date),
            case_quantity: product.case_quantity.clone().unwrap_or_default(),
            received_case: product.received_case.clone().unwrap_or_default(),
            brand_name: product.brand_name.clone().unwrap_or_default(),
            total_available_quantity: product.total_available_quantity.unwrap_or(0),
            quantity_sync: QuantitySync::Auto,
            supplier_name: product.supplier_name.clone().unwrap_or_default(),
            supplier_phone: product.supplier_phone.clone().unwrap_or_default(),
        };

        // Stored legacy price strings are kept as-is until a pricing field changes
        match form.derive_pricing() {
            Ok(out) => form.pricing = out,
            Err(e) => form.pricing_error = Some(e),
        }
        form.sync_total_from_stock();
        form
    }

    /// Result of the pricing engine for the current pricing fields
    pub fn derive_pricing(&self) -> Result<PricingOutput, PricingError> {
        compute_pricing(
            &self.base_price,
            &self.profit_margin_percentage,
            &self.discount_percentage,
        )
    }

    /// Current pricing, or the rejection that is blocking submission
    pub fn pricing(&self) -> Result<PricingOutput, PricingError> {
        match self.pricing_error {
            Some(e) => Err(e),
            None => Ok(self.pricing),
        }
    }

    /// Stored plus newly added images
    pub fn image_count(&self) -> usize {
        self.existing_images.len() + self.images.len()
    }

    /// Apply one edit. On error the form is left unchanged.
    pub fn apply(&mut self, change: FieldChange) -> Result<(), FormError> {
        match change {
            FieldChange::ProductCode(value) => {
                self.product_code = sanitize_product_code(&value);
            }
            FieldChange::Name(value) => self.name = value,
            FieldChange::Description(value) => self.description = value,
            FieldChange::BasePrice(value) => {
                self.base_price = value;
                self.reprice();
            }
            FieldChange::ProfitMarginPercentage(value) => {
                self.profit_margin_percentage = value;
                self.reprice();
            }
            FieldChange::DiscountPercentage(value) => {
                self.discount_percentage = value;
                self.reprice();
            }
            FieldChange::Category(value) => self.category_id = value,
            FieldChange::Subcategory(value) => self.subcategory_id = value,
            FieldChange::Tags(value) => self.tags = value,
            FieldChange::YoutubeLink(value) => self.youtube_link = value,
            FieldChange::StockQuantity(value) => {
                self.stock_quantity = value;
                self.sync_total_from_stock();
            }
            FieldChange::ReceivedDate(value) => self.received_date = value,
            FieldChange::CaseQuantity(value) => {
                self.case_quantity = value;
                self.sync_total_from_cases();
            }
            FieldChange::ReceivedCase(value) => {
                self.received_case = value;
                self.sync_total_from_cases();
            }
            FieldChange::BrandName(value) => self.brand_name = value,
            FieldChange::TotalAvailableQuantity(value) => {
                self.quantity_sync = self.quantity_sync.on_manual_edit();
                self.total_available_quantity = leading_int(&value)
                    .and_then(|v| u64::try_from(v).ok())
                    .unwrap_or(0);
            }
            FieldChange::SupplierName(value) => self.supplier_name = value,
            FieldChange::SupplierPhone(value) => self.supplier_phone = value,
            FieldChange::InStock(value) => self.in_stock = value,
            FieldChange::BestSeller(value) => self.best_seller = value,
            FieldChange::IsActive(value) => self.is_active = value,
            FieldChange::AddImages(files) => self.add_images(files)?,
            FieldChange::RemoveImage(index) => {
                if index >= self.images.len() {
                    return Err(FormError::NoSuchImage(index));
                }
                self.images.remove(index);
            }
        }
        Ok(())
    }

    fn reprice(&mut self) {
        match self.derive_pricing() {
            Ok(out) => {
                self.pricing = out;
                self.pricing_error = None;
                self.price = out.display_original_price.to_string();
                self.offer_price = out.selling_price.to_string();
            }
            Err(e) => {
                tracing::debug!("Pricing rejected: {}", e);
                self.pricing = PricingOutput::ZERO;
                self.pricing_error = Some(e);
                self.price.clear();
                self.offer_price.clear();
            }
        }
    }

    /// Stock quantity edits write through to the total in either sync mode
    fn sync_total_from_stock(&mut self) {
        if self.stock_quantity.is_empty() {
            return;
        }
        if let Some(quantity) = leading_int(&self.stock_quantity).and_then(|v| u64::try_from(v).ok()) {
            self.total_available_quantity = quantity;
        }
    }

    fn sync_total_from_cases(&mut self) {
        if !self.quantity_sync.follows_cases() {
            return;
        }
        let total = compute_total_quantity(&self.case_quantity, &self.received_case);
        self.total_available_quantity = total;
        self.stock_quantity = total.to_string();
    }

    fn add_images(&mut self, files: Vec<FileUpload>) -> Result<(), FormError> {
        let remaining = MAX_IMAGES.saturating_sub(self.image_count());
        if files.len() > remaining {
            return Err(FormError::TooManyImages { remaining });
        }

        let added: Vec<ImageUpload> = files.into_iter().map(ImageUpload::new).collect();
        let invalid = added.iter().filter(|img| !img.is_valid).count();
        if invalid > 0 {
            tracing::debug!("{} of {} added images failed validation", invalid, added.len());
        }
        self.images.extend(added);
        Ok(())
    }
}

/// Pure transition: the form after `change`, leaving `state` untouched.
pub fn transition(state: &ProductForm, change: FieldChange) -> Result<ProductForm, FormError> {
    let mut next = state.clone();
    next.apply(change)?;
    Ok(next)
}

/// Keep ASCII letters and digits, upper-cased, at most 20 characters.
pub fn sanitize_product_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_PRODUCT_CODE_LEN)
        .collect()
}
