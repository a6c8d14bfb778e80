//! Inventory quantity derivation.
//!
//! Total stock is derived from a free-text case size ("qty:100 box") and the
//! number of cases received, until someone types a total by hand.

pub mod calculators;
pub mod routes;
pub mod sync;

pub use calculators::compute_total_quantity;
pub use routes::router;
pub use sync::QuantitySync;
