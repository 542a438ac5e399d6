//! Rental-home listing normalization. Rental homes are served through the
//! same preload cache as sales; `price` is the monthly rent.

use realty_core::schema::require;
use realty_core::RealtyError;

use serde_json::Value;

use crate::details::facts::HomeFacts;
use crate::details::page::PreloadPage;

/// A normalized rental-home listing.
#[derive(Debug, Clone)]
pub struct RentalHomeListing {
    pub facts: HomeFacts,
    /// The raw `resoFacts.feesAndDues` entries (application fees, deposits,
    /// pet fees); free-form per listing.
    pub fees_and_dues: Value,
}

impl RentalHomeListing {
    /// Normalizes a rental-home listing from an extracted preload page.
    ///
    /// # Errors
    ///
    /// As [`HomeFacts::from_property`], plus failures on the
    /// rental-specific `resoFacts.feesAndDues` key.
    pub fn from_page(page: &PreloadPage) -> Result<Self, RealtyError> {
        let property = &page.property;
        let facts = HomeFacts::from_property(property)?;

        let reso = require(property, "resoFacts", "zillow rental property")?;
        let fees_and_dues =
            require(reso, "feesAndDues", "zillow rental property.resoFacts")?.clone();

        Ok(Self {
            facts,
            fees_and_dues,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::details::facts::tests::full_property;

    fn page_for(property: Value) -> PreloadPage {
        PreloadPage {
            variant_cache: Value::Null,
            full_cache: Value::Null,
            property,
        }
    }

    #[test]
    fn rental_home_carries_fees_and_dues() {
        let listing = RentalHomeListing::from_page(&page_for(full_property())).unwrap();
        assert_eq!(listing.fees_and_dues[0]["type"], "HOA");
    }

    #[test]
    fn missing_fees_and_dues_fails_with_the_key_named() {
        let mut property = full_property();
        property["resoFacts"]
            .as_object_mut()
            .unwrap()
            .remove("feesAndDues");

        let err = RentalHomeListing::from_page(&page_for(property)).unwrap_err();
        match err {
            RealtyError::MissingFields { keys, .. } => {
                assert_eq!(keys, vec!["feesAndDues"]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }
}
