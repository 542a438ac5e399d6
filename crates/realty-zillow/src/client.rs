//! HTTP client for Zillow searches and detail pages.

use serde_json::{json, Value};

use realty_core::delay::jittered_delays_default;
use realty_core::extract::decode_json;
use realty_core::schema::{pluck, require};
use realty_core::{RealtyError, RenderedRequest, Transport};

use crate::details::apartment::ApartmentListing;
use crate::details::page::{NextDataPage, PreloadPage};
use crate::details::rental_home::RentalHomeListing;
use crate::details::sale::SaleListing;
use crate::details::{dispatch_target, LazyListings, Listing, Target};
use crate::headers;
use crate::query::{self, SearchQuery};
use crate::types::ListingStub;

const WALK_SCORE_OPERATION: &str = "WalkTransitAndBikeScoreQuery";
const WALK_SCORE_CLIENT_VERSION: &str = "home-details/6.1.1569.master.099cd8a";
const WALK_SCORE_QUERY: &str = "query WalkTransitAndBikeScoreQuery($zpid: ID!) {\n  property(zpid: $zpid) {\n    id\n    walkScore {\n      walkscore\n      description\n      ws_link\n    }\n    transitScore {\n      transit_score\n      description\n      ws_link\n    }\n    bikeScore {\n      bikescore\n      description\n    }\n  }\n}\n";

/// Client for the Zillow search endpoint, detail pages, and the GraphQL
/// score endpoint.
///
/// Holds the shared transport and the site base URL; queries and stubs
/// carry everything else, so one client serves any number of them.
pub struct ZillowClient {
    transport: Transport,
    base_url: String,
}

impl ZillowClient {
    /// # Errors
    ///
    /// Returns [`RealtyError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, RealtyError> {
        Self::with_base_url(timeout_secs, query::ROOT_URL)
    }

    /// A client addressing a different host, e.g. a local test server.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn with_base_url(
        timeout_secs: u64,
        base_url: impl Into<String>,
    ) -> Result<Self, RealtyError> {
        Ok(Self {
            transport: Transport::new(timeout_secs)?,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs a search and returns the full decoded response envelope.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::UnexpectedStatus`] for non-2xx responses.
    /// - [`RealtyError::MalformedResponse`] when the body is not JSON.
    pub async fn search_raw(&self, search: &SearchQuery) -> Result<Value, RealtyError> {
        let url = format!("{}{}", self.base_url, query::SEARCH_PATH);
        let request = search.build_request(&url);
        let response = self.transport.send(&request).await?;
        let body = response.into_success_body(&url)?;
        decode_json(&body, "zillow search response")
    }

    /// Runs a search and returns the raw `listResults` entries.
    ///
    /// # Errors
    ///
    /// As [`search_raw`](Self::search_raw), plus
    /// [`RealtyError::MissingFields`] / [`RealtyError::UnexpectedSchema`]
    /// when the `cat1.searchResults.listResults` path is absent or not a
    /// list.
    pub async fn search(&self, search: &SearchQuery) -> Result<Vec<Value>, RealtyError> {
        let envelope = self.search_raw(search).await?;
        let results = pluck(
            &envelope,
            &["cat1", "searchResults", "listResults"],
            "zillow search response",
        )?;
        let list = results
            .as_array()
            .ok_or_else(|| RealtyError::UnexpectedSchema {
                reason: "cat1.searchResults.listResults is not a list".to_owned(),
            })?;
        tracing::debug!(count = list.len(), "zillow search returned results");
        Ok(list.clone())
    }

    /// Runs a search and reduces every result to a [`ListingStub`].
    ///
    /// # Errors
    ///
    /// As [`search`](Self::search), plus any stub-extraction failure.
    pub async fn search_stubs(&self, search: &SearchQuery) -> Result<Vec<ListingStub>, RealtyError> {
        self.search(search)
            .await?
            .iter()
            .map(ListingStub::from_result)
            .collect()
    }

    async fn fetch_html(&self, url: &str) -> Result<String, RealtyError> {
        let request = RenderedRequest::get(url.to_owned(), headers::HEADER);
        let response = self.transport.send(&request).await?;
        response.into_success_body(url)
    }

    /// Fetches and normalizes a sale detail page.
    ///
    /// # Errors
    ///
    /// Transport and status failures, plus any extraction failure from
    /// [`PreloadPage::from_html`] / [`SaleListing::from_page`].
    pub async fn sale_listing(&self, detail_url: &str) -> Result<SaleListing, RealtyError> {
        let html = self.fetch_html(detail_url).await?;
        let page = PreloadPage::from_html(&html)?;
        SaleListing::from_page(&page)
    }

    /// Fetches and normalizes a rental-home detail page.
    ///
    /// # Errors
    ///
    /// As [`sale_listing`](Self::sale_listing), with the rental-home
    /// normalizer.
    pub async fn rental_home_listing(
        &self,
        detail_url: &str,
    ) -> Result<RentalHomeListing, RealtyError> {
        let html = self.fetch_html(detail_url).await?;
        let page = PreloadPage::from_html(&html)?;
        RentalHomeListing::from_page(&page)
    }

    /// Fetches and normalizes an apartment-building detail page.
    ///
    /// # Errors
    ///
    /// Transport and status failures, plus any extraction failure from
    /// [`NextDataPage::from_html`] / [`ApartmentListing::from_page`].
    pub async fn apartment_listing(&self, url: &str) -> Result<ApartmentListing, RealtyError> {
        let html = self.fetch_html(url).await?;
        let page = NextDataPage::from_html(&html)?;
        ApartmentListing::from_page(&page)
    }

    /// Fetches one stub's detail page, dispatching on its status type and
    /// URL shape.
    ///
    /// # Errors
    ///
    /// [`RealtyError::Dispatch`] for an unclassifiable stub, otherwise as
    /// the per-shape fetchers.
    pub async fn fetch_listing(&self, stub: &ListingStub) -> Result<Listing, RealtyError> {
        match dispatch_target(stub, &self.base_url)? {
            Target::Sale(url) => Ok(Listing::Sale(self.sale_listing(&url).await?)),
            Target::RentalHome(url) => {
                Ok(Listing::RentalHome(self.rental_home_listing(&url).await?))
            }
            Target::Apartment(url) => Ok(Listing::Apartment(self.apartment_listing(&url).await?)),
        }
    }

    /// Fetches every stub's detail page in order, sleeping
    /// `delay_secs × uniform(0, 1) × jitter` between fetches (never after
    /// the last one). The first failure aborts the batch; later stubs are
    /// not fetched.
    ///
    /// # Errors
    ///
    /// As [`fetch_listing`](Self::fetch_listing).
    pub async fn fetch_listings(
        &self,
        stubs: &[ListingStub],
        delay_secs: f64,
        jitter: f64,
    ) -> Result<Vec<Listing>, RealtyError> {
        let delays = jittered_delays_default(stubs.len(), delay_secs, jitter);

        let mut listings = Vec::with_capacity(stubs.len());
        for (i, (stub, delay)) in stubs.iter().zip(delays).enumerate() {
            listings.push(self.fetch_listing(stub).await?);
            tracing::debug!(
                fetched = i + 1,
                total = stubs.len(),
                delay_secs = delay.as_secs_f64(),
                "fetched listing detail"
            );
            tokio::time::sleep(delay).await;
        }
        Ok(listings)
    }

    /// Wraps stubs for on-access fetching. Nothing is fetched until the
    /// returned [`LazyListings`] is indexed, sliced, or iterated, and
    /// nothing is cached afterwards.
    #[must_use]
    pub fn lazy_listings(&self, stubs: Vec<ListingStub>) -> LazyListings<'_> {
        LazyListings::new(self, stubs)
    }

    /// Fetches the walk/transit/bike scores shown on a detail page, an
    /// on-demand GraphQL lookup by property id.
    ///
    /// # Errors
    ///
    /// Transport and status failures, plus
    /// [`RealtyError::MalformedResponse`] / [`RealtyError::MissingFields`]
    /// when the response is not the expected GraphQL envelope.
    pub async fn walk_and_bike_score(&self, zpid: &str) -> Result<Value, RealtyError> {
        let url = format!("{}/graphql", self.base_url);
        let payload = json!({
            "clientVersion": WALK_SCORE_CLIENT_VERSION,
            "operationName": WALK_SCORE_OPERATION,
            "query": WALK_SCORE_QUERY,
            "variables": { "zpid": zpid },
        });
        let request = RenderedRequest::post_json(url.clone(), headers::HEADER, payload)
            .with_query(vec![
                ("zpid", zpid.to_owned()),
                ("operationName", WALK_SCORE_OPERATION.to_owned()),
            ]);

        let response = self.transport.send(&request).await?;
        let body = response.into_success_body(&url)?;
        let envelope = decode_json(&body, "zillow score response")?;
        Ok(require(&envelope, "data", "zillow score response")?.clone())
    }
}
