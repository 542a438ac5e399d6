//! Realtor.com search and detail-page client.
//!
//! Searches are GraphQL POSTs (`ConsumerSearchMainQuery`) against the
//! `hulk_main_srp` endpoint. Detail pages are server-rendered HTML with the
//! listing data in a `__NEXT_DATA__` script element; normalizing a sale
//! record additionally fetches the noise-metrics endpoint for the
//! listing's coordinates.

pub mod client;
pub mod defaults;
pub mod details;
pub mod fields;
pub mod query;
pub mod types;

pub use client::RealtorClient;
pub use details::SaleRecord;
pub use query::SearchQuery;
pub use realty_core::RealtyError;
pub use types::{HomeSearch, SaleStub};
