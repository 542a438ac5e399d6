//! Detail-page normalization: dispatch from search-result stubs to the
//! per-shape listing normalizers, plus eager and lazy batch fetching.

pub mod apartment;
pub mod facts;
pub mod page;
pub mod rental_home;
pub mod sale;

use realty_core::RealtyError;

use crate::client::ZillowClient;
use crate::types::ListingStub;

use apartment::ApartmentListing;
use rental_home::RentalHomeListing;
use sale::SaleListing;

/// A normalized listing of any shape.
#[derive(Debug, Clone)]
pub enum Listing {
    Sale(SaleListing),
    RentalHome(RentalHomeListing),
    Apartment(ApartmentListing),
}

/// Where a stub's detail page lives and which normalizer handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Sale(String),
    RentalHome(String),
    Apartment(String),
}

/// Classifies a stub by its status type and detail-URL shape.
///
/// `FOR_SALE` stubs are sales. `FOR_RENT` stubs split on the URL: the
/// `homedetails` marker means a rental home, the `/b/` marker an apartment
/// building (those URLs are site-relative and get prefixed with
/// `base_url`).
///
/// # Errors
///
/// Returns [`RealtyError::Dispatch`] for an unrecognized status type or a
/// rental URL carrying neither marker.
pub(crate) fn dispatch_target(stub: &ListingStub, base_url: &str) -> Result<Target, RealtyError> {
    match stub.status_type.as_str() {
        "FOR_SALE" => Ok(Target::Sale(stub.detail_url.clone())),
        "FOR_RENT" => {
            if stub.detail_url.contains("homedetails") {
                Ok(Target::RentalHome(stub.detail_url.clone()))
            } else if stub.detail_url.contains("/b/") {
                let url = if stub.detail_url.starts_with("http") {
                    stub.detail_url.clone()
                } else {
                    format!("{base_url}{}", stub.detail_url)
                };
                Ok(Target::Apartment(url))
            } else {
                Err(RealtyError::Dispatch {
                    reason: format!(
                        "rental detail URL \"{}\" carries neither a homedetails nor a /b/ marker",
                        stub.detail_url
                    ),
                })
            }
        }
        other => Err(RealtyError::Dispatch {
            reason: format!("status type should be FOR_SALE or FOR_RENT, was \"{other}\""),
        }),
    }
}

/// Stubs paired with a client, fetched only on access.
///
/// Nothing is cached: `get`, `slice`, and iteration each re-issue the
/// detail-page request for every stub they touch.
pub struct LazyListings<'a> {
    client: &'a ZillowClient,
    stubs: Vec<ListingStub>,
}

impl<'a> LazyListings<'a> {
    pub(crate) fn new(client: &'a ZillowClient, stubs: Vec<ListingStub>) -> Self {
        Self { client, stubs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    /// Fetches and normalizes the listing at `index`, or `None` when out
    /// of bounds.
    pub async fn get(&self, index: usize) -> Option<Result<Listing, RealtyError>> {
        let stub = self.stubs.get(index)?;
        Some(self.client.fetch_listing(stub).await)
    }

    /// Fetches and normalizes `stubs[start..end]` in order, clamped to the
    /// available range. The first failure aborts.
    ///
    /// # Errors
    ///
    /// As [`ZillowClient::fetch_listing`].
    pub async fn slice(&self, start: usize, end: usize) -> Result<Vec<Listing>, RealtyError> {
        let end = end.min(self.stubs.len());
        let start = start.min(end);

        let mut listings = Vec::with_capacity(end - start);
        for stub in &self.stubs[start..end] {
            listings.push(self.client.fetch_listing(stub).await?);
        }
        Ok(listings)
    }

    /// A manual async iterator over the listings; each `next` call issues
    /// a fresh fetch.
    #[must_use]
    pub fn iter(&self) -> LazyIter<'_> {
        LazyIter {
            listings: self,
            index: 0,
        }
    }
}

/// See [`LazyListings::iter`].
pub struct LazyIter<'a> {
    listings: &'a LazyListings<'a>,
    index: usize,
}

impl LazyIter<'_> {
    pub async fn next(&mut self) -> Option<Result<Listing, RealtyError>> {
        let result = self.listings.get(self.index).await?;
        self.index += 1;
        Some(result)
    }
}
