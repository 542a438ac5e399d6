pub mod client;
pub mod details;
pub mod fields;
pub mod query;

pub use client::LandwatchClient;
pub use details::LandParcel;
pub use query::{SaleType, SearchQuery};
pub use realty_core::RealtyError;
