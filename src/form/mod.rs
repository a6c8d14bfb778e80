//! Product and price list forms.
//!
//! The product form is a value plus a transition function: every edit is a
//! [`FieldChange`] applied to a [`ProductForm`], and the pricing and quantity
//! derivations run inside that transition. Nothing here does I/O.

pub mod images;
pub mod payload;
pub mod price_list;
pub mod state;
pub mod validation;

pub use images::{ImageUpload, MAX_IMAGES};
pub use payload::ProductPayload;
pub use price_list::PriceListUpload;
pub use state::{transition, FieldChange, ProductForm};
pub use validation::{filter_subcategories, validate, ValidationContext};

use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// Whether the form creates a new product or edits a stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn is_edit(self) -> bool {
        matches!(self, FormMode::Edit)
    }
}

/// Form errors, worded for the admin user
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("You can only add {remaining} more image(s). Please select fewer files.")]
    TooManyImages { remaining: usize },

    #[error("No image at position {0}")]
    NoSuchImage(usize),

    #[error("Please enter a product code.")]
    MissingProductCode,

    #[error("Product code has not been verified yet.")]
    ProductCodeUnverified,

    #[error("Product code is not available. Please choose a different code.")]
    ProductCodeTaken,

    #[error("Please remove invalid images before submitting.")]
    InvalidImages,

    #[error("Please upload at least one image.")]
    MissingImages,

    #[error("Please enter a valid base price greater than 0.")]
    InvalidBasePrice,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidSupplierPhone,

    #[error("Categories are not available. Please refresh and try again.")]
    CategoriesUnavailable,

    #[error("Please select a category.")]
    MissingCategory,

    #[error("No subcategories available for the selected category. Please select a different category or refresh subcategories.")]
    NoSubcategories,

    #[error("Please select a subcategory.")]
    MissingSubcategory,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Please enter a document name")]
    MissingDocumentName,

    #[error("Please select a PDF file")]
    MissingPdf,

    #[error("Only PDF files are allowed")]
    NotPdf,

    #[error("File size cannot exceed 1GB")]
    PdfTooLarge,
}
