//! Detail-page payload extraction.
//!
//! Sale and rental-home pages embed an Apollo preload cache in
//! `<script id="hdpApolloPreloadedData">`; its `apiCache` field is itself a
//! JSON-encoded string holding exactly two entries whose dynamically
//! generated keys are distinguishable only by the substrings `Variant` and
//! `Full`. Apartment-building pages embed a Next.js payload in
//! `<script id="__NEXT_DATA__">` instead.

use serde_json::Value;

use realty_core::extract::{decode_nested, partition_cache, script_json};
use realty_core::schema::pluck;
use realty_core::RealtyError;

/// The decoded Apollo preload of a sale or rental-home page.
#[derive(Debug, Clone)]
pub struct PreloadPage {
    /// The variant api cache entry.
    pub variant_cache: Value,
    /// The full api cache entry.
    pub full_cache: Value,
    /// The property data object the normalizers read. Taken from the full
    /// cache; falls back to the variant cache when the full entry carries
    /// no property data.
    pub property: Value,
}

impl PreloadPage {
    /// Extracts the preload caches from a detail-page HTML document.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::ElementNotFound`] when the preload script element
    ///   is absent.
    /// - [`RealtyError::MalformedResponse`] when either decode layer fails.
    /// - [`RealtyError::UnexpectedSchema`] when the cache keys do not
    ///   classify cleanly into one variant and one full entry, or neither
    ///   entry holds property data.
    pub fn from_html(html: &str) -> Result<Self, RealtyError> {
        let mut preload = script_json(html, "hdpApolloPreloadedData")?;
        decode_nested(&mut preload, "apiCache")?;

        let (variant, full) = partition_cache(&preload["apiCache"], "Variant", "Full")?;

        let property = property_data(full)
            .or_else(|| property_data(variant))
            .ok_or_else(|| RealtyError::UnexpectedSchema {
                reason: "neither api cache entry holds property data".to_owned(),
            })?
            .clone();

        Ok(Self {
            variant_cache: variant.clone(),
            full_cache: full.clone(),
            property,
        })
    }
}

fn property_data(cache: &Value) -> Option<&Value> {
    cache.get("property").filter(|p| !p.is_null())
}

/// The decoded Next.js payload of an apartment-building page.
#[derive(Debug, Clone)]
pub struct NextDataPage {
    pub initial_data: Value,
    pub redux_state: Value,
}

impl NextDataPage {
    /// Extracts the Next.js payload from a detail-page HTML document.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::ElementNotFound`] when the script element is
    ///   absent.
    /// - [`RealtyError::MalformedResponse`] when its text is not JSON.
    /// - [`RealtyError::MissingFields`] when `props.initialData` or
    ///   `props.initialReduxState` is absent.
    pub fn from_html(html: &str) -> Result<Self, RealtyError> {
        let ndata = script_json(html, "__NEXT_DATA__")?;
        let initial_data = pluck(&ndata, &["props", "initialData"], "next_data")?.clone();
        let redux_state = pluck(&ndata, &["props", "initialReduxState"], "next_data")?.clone();
        Ok(Self {
            initial_data,
            redux_state,
        })
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
