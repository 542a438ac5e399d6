//! Normalization of a detail page's `propertyDetails` object.
//!
//! Direct-access strategy: fields are read in declaration order and the
//! first absent key fails with a single-key `MissingFields`. Keys present
//! with a JSON `null` normalize to `None`.

use serde_json::Value;

use realty_core::schema::{
    optional, optional_f64, optional_str, pluck, require, require_f64, require_i64,
    require_nullable_f64, require_nullable_i64, require_nullable_str, require_str,
};
use realty_core::RealtyError;

const CONTEXT: &str = "realtor property";

/// A normalized for-sale listing.
///
/// Structured sub-documents the site keeps as free-form JSON (`details`,
/// `open_houses`, the history arrays) are carried raw.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    pub property_id: String,
    pub listing_date: Option<String>,
    pub status: String,
    pub price: i64,
    pub price_per_sqft: Option<f64>,
    pub yearly_property_tax: Option<f64>,
    pub year_built: Option<i64>,
    pub beds: Option<i64>,
    pub baths: Option<f64>,
    pub garage: Option<i64>,
    pub interior_sqft: Option<i64>,
    pub lot_sqft: Option<i64>,
    pub listing_description: Option<String>,
    pub details: Value,
    pub open_houses: Value,
    pub property_history: Value,
    pub tax_history: Value,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub zip: String,
    pub county: Option<String>,
    pub fips: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub hoa_fee: f64,
    pub area_market_status: Option<Value>,
    /// Noise summary for the coordinates; `"Unknown"` until the client's
    /// secondary fetch fills it in, and when that fetch has no summary.
    pub noise: String,
}

impl SaleRecord {
    /// Normalizes the `propertyDetails` object of a detail page.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::MissingFields`] naming the first absent key,
    /// or [`RealtyError::UnexpectedSchema`] when a present key carries the
    /// wrong type.
    pub fn from_details(details: &Value) -> Result<Self, RealtyError> {
        let description = require(details, "description", CONTEXT)?;
        let location = require(details, "location", CONTEXT)?;
        let address = require(location, "address", CONTEXT)?;
        let coordinate = require(address, "coordinate", CONTEXT)?;

        let city = require_str(address, "city", CONTEXT)?.to_owned();
        let state_code = require_str(address, "state_code", CONTEXT)?.to_owned();
        let zip = require_str(address, "postal_code", CONTEXT)?.to_owned();
        let line = require_str(address, "line", CONTEXT)?;
        let street_address = format!("{line}, {city}, {state_code} {zip}");

        Ok(Self {
            property_id: require_str(details, "property_id", CONTEXT)?.to_owned(),
            listing_date: require_nullable_str(details, "listing_date", CONTEXT)?
                .map(str::to_owned),
            status: require_str(details, "status", CONTEXT)?.to_owned(),
            price: require_i64(details, "list_price", CONTEXT)?,
            price_per_sqft: require_nullable_f64(details, "price_per_sqft", CONTEXT)?,
            yearly_property_tax: yearly_property_tax(details)?,
            year_built: require_nullable_i64(description, "year_built", CONTEXT)?,
            beds: require_nullable_i64(description, "beds", CONTEXT)?,
            baths: require_nullable_f64(description, "baths", CONTEXT)?,
            garage: require_nullable_i64(description, "garage", CONTEXT)?,
            interior_sqft: require_nullable_i64(description, "sqft", CONTEXT)?,
            lot_sqft: require_nullable_i64(description, "lot_sqft", CONTEXT)?,
            listing_description: require_nullable_str(description, "text", CONTEXT)?
                .map(str::to_owned),
            details: require(details, "details", CONTEXT)?.clone(),
            open_houses: require(details, "open_houses", CONTEXT)?.clone(),
            property_history: require(details, "property_history", CONTEXT)?.clone(),
            tax_history: require(details, "tax_history", CONTEXT)?.clone(),
            street_address,
            city,
            state: require_str(address, "state", CONTEXT)?.to_owned(),
            state_code,
            zip,
            county: county_name(address),
            fips: fips_code(location)?,
            latitude: require_f64(coordinate, "lat", CONTEXT)?,
            longitude: require_f64(coordinate, "lon", CONTEXT)?,
            hoa_fee: hoa_fee(details),
            area_market_status: area_market_status(location),
            noise: "Unknown".to_owned(),
        })
    }
}

/// `source.raw.tax_amount`, tolerated as absent because off-market pages
/// drop the `source` document entirely.
fn yearly_property_tax(details: &Value) -> Result<Option<f64>, RealtyError> {
    match optional(details, "source").and_then(|source| optional(source, "raw")) {
        Some(raw) if !raw.is_null() => require_nullable_f64(raw, "tax_amount", CONTEXT),
        _ => Ok(None),
    }
}

/// The county renders as a plain string on some pages and as an object
/// with a `name` field on others.
fn county_name(address: &Value) -> Option<String> {
    match optional(address, "county")? {
        Value::String(name) => Some(name.clone()),
        value => optional_str(value, "name").map(str::to_owned),
    }
}

fn fips_code(location: &Value) -> Result<Option<String>, RealtyError> {
    match optional(location, "county") {
        Some(county) if !county.is_null() => {
            Ok(require_nullable_str(county, "fips_code", CONTEXT)?.map(str::to_owned))
        }
        _ => Ok(None),
    }
}

fn hoa_fee(details: &Value) -> f64 {
    optional(details, "hoa")
        .and_then(|hoa| optional_f64(hoa, "fee"))
        .unwrap_or(0.0)
}

fn area_market_status(location: &Value) -> Option<Value> {
    pluck(
        location,
        &["postal_code", "geo_statistics", "housing_market"],
        CONTEXT,
    )
    .ok()
    .filter(|status| !status.is_null())
    .cloned()
}

#[cfg(test)]
#[path = "details_test.rs"]
pub(crate) mod tests;
