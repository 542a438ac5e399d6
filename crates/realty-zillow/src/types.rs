//! Search-result types.

use serde_json::Value;

use realty_core::schema::{optional_str, require_str};
use realty_core::RealtyError;

/// One entry of `cat1.searchResults.listResults`: just enough to fetch and
/// dispatch the detail page. A stub never caches the detail page; every
/// fetch through a stub re-issues the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingStub {
    /// Property id. The endpoint serves this as a number on some result
    /// shapes and a string on others, so it is coerced to a string.
    pub zpid: Option<String>,
    /// Detail-page URL: absolute for homes, site-relative for apartment
    /// buildings.
    pub detail_url: String,
    /// Listing discriminator, `FOR_SALE` or `FOR_RENT`.
    pub status_type: String,
}

impl ListingStub {
    /// Builds a stub from one raw search result.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::MissingFields`] when `detailUrl` or
    /// `statusType` is absent, [`RealtyError::UnexpectedSchema`] when
    /// either is not a string.
    pub fn from_result(result: &Value) -> Result<Self, RealtyError> {
        let context = "zillow search result";
        let detail_url = require_str(result, "detailUrl", context)?.to_owned();
        let status_type = require_str(result, "statusType", context)?.to_owned();

        let zpid = match result.get("zpid") {
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => optional_str(result, "zpid").map(str::to_owned),
        };

        Ok(Self {
            zpid,
            detail_url,
            status_type,
        })
    }
}
