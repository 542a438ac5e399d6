//! Zillow search and detail-page client.
//!
//! Searches go to the `GetSearchPageState.htm` endpoint with the filter
//! state JSON-encoded into query-string parameters. Detail pages are
//! server-rendered HTML with the listing data embedded in script elements
//! (`hdpApolloPreloadedData` for sale and rental-home pages, `__NEXT_DATA__`
//! for apartment buildings); the [`details`] module extracts and normalizes
//! them.

pub mod client;
pub mod details;
pub mod fields;
pub mod headers;
pub mod query;
pub mod types;

pub use client::ZillowClient;
pub use details::apartment::ApartmentListing;
pub use details::rental_home::RentalHomeListing;
pub use details::sale::SaleListing;
pub use details::{LazyListings, Listing};
pub use query::SearchQuery;
pub use realty_core::RealtyError;
pub use types::ListingStub;
