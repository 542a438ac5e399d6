//! Apartment-building listing normalization.
//!
//! Building pages are served through the Next.js payload rather than the
//! Apollo preload cache, with the data under `initialData.building`. The
//! building attributes object carries a long tail of amenity flags; the
//! headline ones are typed here and the full object is kept raw.

use serde_json::Value;

use realty_core::schema::{
    pluck, require, require_bool, require_nullable_f64, require_nullable_str, require_str,
};
use realty_core::RealtyError;

use crate::details::page::NextDataPage;

const CONTEXT: &str = "zillow building";
const ATTR_CONTEXT: &str = "zillow building.buildingAttributes";

/// A normalized apartment-building listing.
#[derive(Debug, Clone)]
pub struct ApartmentListing {
    pub zpid: String,
    pub building_name: String,
    pub description: Option<String>,
    pub low_income: bool,
    pub senior_housing: bool,
    pub student_housing: bool,
    /// Leasing-office hours, free-form strings.
    pub office_hours: Value,
    pub office_number: Option<String>,
    pub unit_features: Value,
    pub city: String,
    pub county: Option<String>,
    pub state: String,
    pub zip: String,
    pub street_address: String,
    pub application_fee: Option<f64>,
    pub administrative_fee: Option<f64>,
    pub deposit_fee_min: Option<f64>,
    pub deposit_fee_max: Option<f64>,
    pub shared_laundry: Option<bool>,
    pub swimming_pool: Option<bool>,
    /// The complete `buildingAttributes` object for the amenity long tail.
    pub attributes: Value,
    pub floorplans: Value,
}

impl ApartmentListing {
    /// Normalizes an apartment-building listing from an extracted Next.js
    /// payload.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::MissingFields`] on the first absent required key.
    /// - [`RealtyError::UnexpectedSchema`] when a present value has the
    ///   wrong type.
    pub fn from_page(page: &NextDataPage) -> Result<Self, RealtyError> {
        let building = require(&page.initial_data, "building", "zillow next data")?;
        let attributes = require(building, "buildingAttributes", CONTEXT)?;

        let zpid = match require(building, "zpid", CONTEXT)? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => {
                return Err(RealtyError::UnexpectedSchema {
                    reason: "zillow building.zpid is neither a number nor a string".to_owned(),
                })
            }
        };

        Ok(Self {
            zpid,
            building_name: require_str(building, "buildingName", CONTEXT)?.to_owned(),
            description: require_nullable_str(building, "description", CONTEXT)?
                .map(str::to_owned),
            low_income: require_bool(building, "isLowIncome", CONTEXT)?,
            senior_housing: require_bool(building, "isSeniorHousing", CONTEXT)?,
            student_housing: require_bool(building, "isStudentHousing", CONTEXT)?,
            office_hours: pluck(building, &["amenityDetails", "hours"], CONTEXT)?.clone(),
            office_number: require_nullable_str(building, "buildingPhoneNumber", CONTEXT)?
                .map(str::to_owned),
            unit_features: pluck(building, &["amenityDetails", "unitFeatures"], CONTEXT)?.clone(),
            city: require_str(building, "city", CONTEXT)?.to_owned(),
            county: require_nullable_str(building, "county", CONTEXT)?.map(str::to_owned),
            state: require_str(building, "state", CONTEXT)?.to_owned(),
            zip: require_str(building, "zipcode", CONTEXT)?.to_owned(),
            street_address: require_str(building, "fullAddress", CONTEXT)?.to_owned(),
            application_fee: require_nullable_f64(attributes, "applicationFee", ATTR_CONTEXT)?,
            administrative_fee: require_nullable_f64(
                attributes,
                "administrativeFee",
                ATTR_CONTEXT,
            )?,
            deposit_fee_min: require_nullable_f64(attributes, "depositFeeMin", ATTR_CONTEXT)?,
            deposit_fee_max: require_nullable_f64(attributes, "depositFeeMax", ATTR_CONTEXT)?,
            shared_laundry: attributes
                .get("hasSharedLaundry")
                .and_then(Value::as_bool),
            swimming_pool: attributes
                .get("hasSwimmingPool")
                .and_then(Value::as_bool),
            attributes: attributes.clone(),
            floorplans: require(building, "floorplans", CONTEXT)?.clone(),
        })
    }
}

#[cfg(test)]
#[path = "apartment_test.rs"]
mod tests;
