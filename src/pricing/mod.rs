//! Pricing engine module.
//!
//! Derives the selling price and the crossed-out display price of a product
//! from its cost price, profit margin and display discount. Exposed over
//! HTTP/JSON for the admin front end.

pub mod calculators;
pub mod display;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{
    calculate_pricing, compute_pricing, round_money, PricingError, PricingInput, PricingOutput,
};
pub use display::DisplayPricing;
pub use routes::router;
