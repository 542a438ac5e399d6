//! HTTP client for Landwatch search queries.

use serde_json::Value;

use realty_core::extract::decode_json;
use realty_core::schema::pluck;
use realty_core::{RealtyError, Transport};

use crate::details::LandParcel;
use crate::query::SearchQuery;

/// Client for the Landwatch search endpoint.
///
/// Holds only the shared transport; each query renders its own URL, so the
/// same client serves any number of independent queries.
pub struct LandwatchClient {
    transport: Transport,
}

impl LandwatchClient {
    /// # Errors
    ///
    /// Returns [`RealtyError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, RealtyError> {
        Ok(Self {
            transport: Transport::new(timeout_secs)?,
        })
    }

    /// Runs a search and returns the full decoded response envelope.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::UnexpectedStatus`] for non-2xx responses.
    /// - [`RealtyError::MalformedResponse`] when the body is not JSON.
    pub async fn search_raw(&self, query: &SearchQuery) -> Result<Value, RealtyError> {
        let request = query.build_request()?;
        let url = request.url.clone();
        let response = self.transport.send(&request).await?;
        let body = response.into_success_body(&url)?;
        decode_json(&body, "landwatch search response")
    }

    /// Runs a search and returns the raw `propertyResults` entries.
    ///
    /// # Errors
    ///
    /// As [`search_raw`](Self::search_raw), plus
    /// [`RealtyError::MissingFields`] / [`RealtyError::UnexpectedSchema`]
    /// when the `searchResults.propertyResults` path is absent or not a
    /// list.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Value>, RealtyError> {
        let envelope = self.search_raw(query).await?;
        let results = pluck(
            &envelope,
            &["searchResults", "propertyResults"],
            "landwatch search response",
        )?;
        let list = results
            .as_array()
            .ok_or_else(|| RealtyError::UnexpectedSchema {
                reason: "searchResults.propertyResults is not a list".to_owned(),
            })?;
        tracing::debug!(count = list.len(), "landwatch search returned results");
        Ok(list.clone())
    }

    /// Runs a search and normalizes every result.
    ///
    /// # Errors
    ///
    /// As [`search`](Self::search), plus any normalization failure from
    /// [`LandParcel::from_result`]. The first failure aborts the batch.
    pub async fn search_listings(&self, query: &SearchQuery) -> Result<Vec<LandParcel>, RealtyError> {
        self.search(query)
            .await?
            .iter()
            .map(LandParcel::from_result)
            .collect()
    }
}
