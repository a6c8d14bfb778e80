//! Product, category and subcategory resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{opt_number_or_string, opt_string_or_number};

/// Reference to another resource, either a bare id or a populated `{_id, name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: String,
    },
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category_id: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subcategory {
    /// Whether this subcategory belongs to the given category id
    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id
            .as_ref()
            .is_some_and(|parent| parent.id() == category_id)
    }
}

/// Image already stored by the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub public_id: String,
}

/// Product as returned by the catalog API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_code: String,
    pub name: String,
    pub description: String,

    // Legacy price fields
    pub price: f64,
    #[serde(deserialize_with = "opt_number_or_string")]
    pub offer_price: Option<f64>,

    // Derived pricing fields
    #[serde(deserialize_with = "opt_number_or_string")]
    pub base_price: Option<f64>,
    #[serde(deserialize_with = "opt_number_or_string")]
    pub profit_margin_percentage: Option<f64>,
    #[serde(deserialize_with = "opt_number_or_string")]
    pub profit_margin_price: Option<f64>,
    #[serde(deserialize_with = "opt_number_or_string")]
    pub discount_percentage: Option<f64>,
    #[serde(deserialize_with = "opt_number_or_string")]
    pub calculated_original_price: Option<f64>,

    pub category_id: Option<EntityRef>,
    pub subcategory_id: Option<EntityRef>,
    pub in_stock: bool,
    pub best_seller: bool,
    pub featured: Option<bool>,
    pub tags: Vec<String>,
    pub images: Vec<ProductImage>,
    pub is_active: Option<bool>,
    pub youtube_link: Option<String>,
    pub stock_quantity: Option<u64>,

    // Inventory fields
    pub received_date: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub case_quantity: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub received_case: Option<String>,
    pub brand_name: Option<String>,
    pub total_available_quantity: Option<u64>,

    // Supplier fields
    pub supplier_name: Option<String>,
    pub supplier_phone: Option<String>,

    // Computed by the catalog API
    pub savings: Option<f64>,
    pub savings_percentage: Option<f64>,
    pub final_price: Option<f64>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Availability of a product code for a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCodeCheck {
    pub product_code: String,
    pub is_available: bool,
    #[serde(default)]
    pub message: String,
}
