//! Landwatch listing normalization.
//!
//! A search response already carries the complete listing payload, so
//! normalization is a pure structural transformation: the full expected key
//! set is checked up front (one failure names every missing key), then the
//! flat record is extracted.

use serde_json::Value;

use realty_core::schema::{
    check_required_keys, optional_f64, optional_str, require_bool, require_f64, require_str,
};
use realty_core::RealtyError;

use crate::query::ROOT_URL;

const CONTEXT: &str = "property_result";

/// Every key a Landwatch `propertyResults` entry is expected to carry.
/// Checked in full before extraction so schema drift surfaces as one error
/// naming the complete missing set.
pub const EXPECTED_KEYS: &[&str] = &[
    "accountId",
    "acres",
    "acresDisplay",
    "adTargetingCountyId",
    "address",
    "auctionDate",
    "baths",
    "bathsDisplay",
    "beds",
    "bedsDisplay",
    "brokerCompany",
    "brokerName",
    "canonicalUrl",
    "city",
    "cityID",
    "companyLogoDocumentId",
    "county",
    "countyId",
    "countyLabel",
    "description",
    "encodedBoundaryPoints",
    "externalSourceId",
    "halfBaths",
    "halfBathsDisplay",
    "hasHouse",
    "hasVideo",
    "hasVirtualTour",
    "homesqft",
    "homesqftDisplay",
    "id",
    "imageAltTextDisplay",
    "imageCount",
    "isALC",
    "isDiamond",
    "isFirstFreeListing",
    "isGold",
    "isHeadlineAd",
    "isLiked",
    "isPlatinum",
    "isShowcase",
    "lake",
    "latitude",
    "listHubListingKey",
    "listingLevel",
    "listingLevelTitle",
    "longitude",
    "partnerId",
    "portraitDocumentId",
    "price",
    "priceChange",
    "priceDisplay",
    "propertyTypes",
    "propertyTypesLabel",
    "schemaData",
    "shortPrice",
    "siteListingId",
    "state",
    "stateAbbreviation",
    "stateCode",
    "stateId",
    "status",
    "thumbnailDocumentId",
    "title",
    "types",
    "zip",
];

/// Normalized Landwatch land-parcel listing.
///
/// Presence of every [`EXPECTED_KEYS`] entry is required; several values are
/// nullable on the wire (auction date, lake, bed/bath counts on raw land)
/// and surface as `Option`.
#[derive(Debug, Clone)]
pub struct LandParcel {
    pub price: f64,
    pub acres: f64,
    pub home_sqft: Option<f64>,

    pub address: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub state_code: String,
    pub zip: String,
    pub lake: Option<String>,
    pub longitude: f64,
    pub latitude: f64,

    pub auction_date: Option<String>,

    pub description: String,
    pub has_house: bool,
    pub has_video: bool,
    pub has_virtual_tour: bool,
    pub labels: String,

    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub half_baths: Option<f64>,

    pub broker_company: Option<String>,
    pub broker_name: Option<String>,

    /// Absolute detail URL, built from the site-relative `canonicalUrl`.
    pub url: String,
}

impl LandParcel {
    /// Normalizes one raw `propertyResults` entry.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::MissingFields`] naming every absent expected key.
    /// - [`RealtyError::UnexpectedSchema`] when a present key has the wrong
    ///   type.
    pub fn from_result(property_result: &Value) -> Result<Self, RealtyError> {
        check_required_keys(property_result, EXPECTED_KEYS, CONTEXT)?;

        Ok(Self {
            price: require_f64(property_result, "price", CONTEXT)?,
            acres: require_f64(property_result, "acres", CONTEXT)?,
            home_sqft: optional_f64(property_result, "homesqft"),

            address: require_str(property_result, "address", CONTEXT)?.to_owned(),
            city: require_str(property_result, "city", CONTEXT)?.to_owned(),
            county: require_str(property_result, "county", CONTEXT)?.to_owned(),
            state: require_str(property_result, "state", CONTEXT)?.to_owned(),
            state_code: require_str(property_result, "stateCode", CONTEXT)?.to_owned(),
            zip: require_str(property_result, "zip", CONTEXT)?.to_owned(),
            lake: optional_str(property_result, "lake").map(str::to_owned),
            longitude: require_f64(property_result, "longitude", CONTEXT)?,
            latitude: require_f64(property_result, "latitude", CONTEXT)?,

            auction_date: optional_str(property_result, "auctionDate").map(str::to_owned),

            description: require_str(property_result, "description", CONTEXT)?.to_owned(),
            has_house: require_bool(property_result, "hasHouse", CONTEXT)?,
            has_video: require_bool(property_result, "hasVideo", CONTEXT)?,
            has_virtual_tour: require_bool(property_result, "hasVirtualTour", CONTEXT)?,
            labels: require_str(property_result, "propertyTypesLabel", CONTEXT)?.to_owned(),

            beds: optional_f64(property_result, "beds"),
            baths: optional_f64(property_result, "baths"),
            half_baths: optional_f64(property_result, "halfBaths"),

            broker_company: optional_str(property_result, "brokerCompany").map(str::to_owned),
            broker_name: optional_str(property_result, "brokerName").map(str::to_owned),

            url: format!(
                "{ROOT_URL}{}",
                require_str(property_result, "canonicalUrl", CONTEXT)?
            ),
        })
    }
}

#[cfg(test)]
#[path = "details_test.rs"]
mod tests;
