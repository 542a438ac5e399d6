//! Fields shared by sale and rental-home pages.
//!
//! Both page kinds serve the same property object through the Apollo
//! preload cache; the per-kind normalizers wrap these facts with their own
//! additions. Access is direct: the first missing key fails, but a key
//! present with a `null` value stays a `None`.

use serde_json::Value;

use realty_core::parse::parse_lot_size;
use realty_core::schema::{
    optional, require, require_f64, require_i64, require_nullable_f64, require_nullable_i64,
    require_nullable_str, require_str,
};
use realty_core::RealtyError;

const CONTEXT: &str = "zillow property";

/// Core facts of a sale or rental-home listing.
#[derive(Debug, Clone)]
pub struct HomeFacts {
    pub zpid: i64,
    /// Listing status, e.g. `FOR_SALE` or `FOR_RENT`.
    pub status: String,
    pub home_type: String,
    pub year_built: Option<i64>,
    /// Sale price for sale listings, monthly rent for rentals.
    pub price: i64,
    pub zestimate: Option<i64>,
    pub rental_zestimate: Option<i64>,
    pub currency: String,
    pub days_on_zillow: Option<i64>,
    pub views: Option<i64>,
    pub saves: Option<i64>,
    pub description: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub interior_sqft: Option<f64>,
    /// Monthly HOA fee; zero when the listing carries none.
    pub hoa_fee: f64,
    /// Yearly property tax rate as a percentage.
    pub property_tax_rate: Option<f64>,
    /// Lot size as served, a unit-bearing string.
    pub lot_size: Option<String>,
    /// Lot size normalized to square feet.
    pub lot_sqft: Option<f64>,
    pub tax_history: Value,
    pub price_history: Value,
}

impl HomeFacts {
    /// Extracts the shared facts from the property data object.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::MissingFields`] on the first absent required key.
    /// - [`RealtyError::UnexpectedSchema`] when a present value has the
    ///   wrong type.
    /// - [`RealtyError::InvalidQuantity`] when the lot-size string is in an
    ///   unrecognized format.
    pub fn from_property(property: &Value) -> Result<Self, RealtyError> {
        let address = require(property, "address", CONTEXT)?;
        let address_context = "zillow property.address";

        let lot_size = optional(property, "resoFacts")
            .and_then(|reso| optional(reso, "lotSize"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        let lot_sqft = match lot_size.as_deref() {
            Some(s) => parse_lot_size(s)?,
            None => None,
        };

        Ok(Self {
            zpid: require_i64(property, "zpid", CONTEXT)?,
            status: require_str(property, "homeStatus", CONTEXT)?.to_owned(),
            home_type: require_str(property, "homeType", CONTEXT)?.to_owned(),
            year_built: require_nullable_i64(property, "yearBuilt", CONTEXT)?,
            price: require_i64(property, "price", CONTEXT)?,
            zestimate: optional(property, "zestimate").and_then(Value::as_i64),
            rental_zestimate: optional(property, "rentalZestimate").and_then(Value::as_i64),
            currency: require_str(property, "currency", CONTEXT)?.to_owned(),
            days_on_zillow: optional(property, "daysOnZillow").and_then(Value::as_i64),
            views: optional(property, "pageViewCount").and_then(Value::as_i64),
            saves: optional(property, "favoriteCount").and_then(Value::as_i64),
            description: require_nullable_str(property, "description", CONTEXT)?
                .map(str::to_owned),
            street_address: require_str(address, "streetAddress", address_context)?.to_owned(),
            city: require_str(address, "city", address_context)?.to_owned(),
            state: require_str(address, "state", address_context)?.to_owned(),
            zip: require_str(address, "zipcode", address_context)?.to_owned(),
            latitude: require_f64(property, "latitude", CONTEXT)?,
            longitude: require_f64(property, "longitude", CONTEXT)?,
            bedrooms: require_nullable_f64(property, "bedrooms", CONTEXT)?,
            bathrooms: require_nullable_f64(property, "bathrooms", CONTEXT)?,
            interior_sqft: require_nullable_f64(property, "livingArea", CONTEXT)?,
            hoa_fee: optional(property, "monthlyHoaFee")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            property_tax_rate: optional(property, "propertyTaxRate").and_then(Value::as_f64),
            lot_size,
            lot_sqft,
            tax_history: require(property, "taxHistory", CONTEXT)?.clone(),
            price_history: require(property, "priceHistory", CONTEXT)?.clone(),
        })
    }
}

#[cfg(test)]
#[path = "facts_test.rs"]
pub(crate) mod tests;
