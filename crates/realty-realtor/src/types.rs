//! Typed views over the search envelope.

use serde::Deserialize;
use serde_json::Value;

use realty_core::RealtyError;

/// The `data.home_search` object of a search response: the match counts
/// plus the raw result objects. Results stay raw because the search page
/// only needs a handful of fields; the detail fetch normalizes the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeSearch {
    pub count: Option<i64>,
    pub total: Option<i64>,
    #[serde(default)]
    pub results: Vec<Value>,
}

impl HomeSearch {
    /// # Errors
    ///
    /// Returns [`RealtyError::MalformedResponse`] when the envelope does
    /// not have the expected shape.
    pub fn from_value(envelope: Value) -> Result<Self, RealtyError> {
        serde_json::from_value(envelope).map_err(|source| RealtyError::MalformedResponse {
            context: "realtor home_search envelope".to_owned(),
            source,
        })
    }

    /// Typed stubs for every result. Results missing an id or permalink
    /// fail the whole batch rather than being silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::MalformedResponse`] for a result that does
    /// not carry the stub fields.
    pub fn stubs(&self) -> Result<Vec<SaleStub>, RealtyError> {
        self.results
            .iter()
            .map(|result| {
                serde_json::from_value(result.clone()).map_err(|source| {
                    RealtyError::MalformedResponse {
                        context: "realtor search result".to_owned(),
                        source,
                    }
                })
            })
            .collect()
    }
}

/// The slice of a search result needed to reach its detail page.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleStub {
    pub property_id: String,
    /// Path segment of the detail page, relative to the site root.
    pub permalink: String,
    #[serde(default)]
    pub list_price: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl SaleStub {
    /// Absolute detail-page URL against the given site base.
    #[must_use]
    pub fn detail_url(&self, base_url: &str) -> String {
        format!("{base_url}/realestateandhomes-detail/{}", self.permalink)
    }
}
