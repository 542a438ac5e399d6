//! Realtor.com GraphQL query builder.
//!
//! The search endpoint takes a fixed GraphQL document plus a `variables`
//! object holding the filter criteria, pagination, and sorting. Rendering
//! never mutates the builder; the same state renders byte-identically
//! every time, so a caller can re-render across pages.
//!
//! The `sort` and `sort_type` variables are mutually exclusive: the
//! "relevant" preset sets `sort_type` and clears any field sort, and any
//! field preset sets `sort` and clears `sort_type`, in either call order.

use std::collections::BTreeSet;

use serde_json::{json, Map, Value};

use realty_core::{RealtyError, RenderedRequest};

use crate::defaults;
use crate::fields;

/// Accumulated search criteria, rendered on demand.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    limit: u32,
    offset: u32,
    /// Field sort, `(field, ascending)`. Mutually exclusive with
    /// `sort_type`.
    sort: Option<(&'static str, bool)>,
    sort_type: Option<&'static str>,
    search_location: Option<String>,
    statuses: BTreeSet<&'static str>,
    property_types: BTreeSet<&'static str>,
    price_min: Option<u64>,
    price_max: Option<u64>,
    beds_min: Option<u64>,
    beds_max: Option<u64>,
    baths_min: Option<u64>,
    baths_max: Option<u64>,
    sqft_min: Option<u64>,
    sqft_max: Option<u64>,
    hoa_max: Option<u64>,
    tags: BTreeSet<&'static str>,
    exclude_tags: BTreeSet<&'static str>,
    visitor_id: Option<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            limit: defaults::DEFAULT_LIMIT,
            offset: 0,
            sort: None,
            sort_type: Some("relevant"),
            search_location: None,
            statuses: BTreeSet::from(["for_sale"]),
            property_types: BTreeSet::new(),
            price_min: None,
            price_max: None,
            beds_min: None,
            beds_max: None,
            baths_min: None,
            baths_max: None,
            sqft_min: None,
            sqft_max: None,
            hoa_max: None,
            tags: BTreeSet::new(),
            exclude_tags: BTreeSet::new(),
            visitor_id: None,
        }
    }
}

impl SearchQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of results per response. The site default is 42.
    pub fn set_limit(&mut self, limit: u32) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Result offset; pagination works by offsetting in steps of the
    /// limit.
    pub fn set_offset(&mut self, offset: u32) -> &mut Self {
        self.offset = offset;
        self
    }

    /// Sets the offset from a 1-based page number using the current limit.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidPage`] for pages below 1; the builder
    /// is left untouched.
    pub fn set_page(&mut self, page: i64) -> Result<&mut Self, RealtyError> {
        if page < 1 {
            return Err(RealtyError::InvalidPage { page });
        }
        let page = u32::try_from(page).map_err(|_| RealtyError::InvalidPage { page })?;
        self.offset = (page - 1) * self.limit;
        Ok(self)
    }

    /// Applies a sort preset. `"relevant"` is the endpoint's own ranking
    /// and renders as `sort_type`; every other preset renders as a field
    /// sort. `ascending` has no effect on `"relevant"`.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unrecognized preset;
    /// the builder is left untouched.
    pub fn set_sort_preset(
        &mut self,
        preset: &str,
        ascending: bool,
    ) -> Result<&mut Self, RealtyError> {
        if preset.eq_ignore_ascii_case("relevant") {
            self.sort = None;
            self.sort_type = Some("relevant");
            return Ok(self);
        }
        let field = fields::sort_field(preset)?;
        self.sort_type = None;
        self.sort = Some((field, ascending));
        Ok(self)
    }

    /// Free-text location (a city/state string, address, or ZIP).
    pub fn set_search_location(&mut self, location: &str) -> &mut Self {
        self.search_location = Some(location.to_owned());
        self
    }

    /// Replaces the status set. An empty input clears every status; the
    /// statuses end up exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for any unrecognized status;
    /// the builder is left untouched.
    pub fn set_statuses(&mut self, statuses: &[&str]) -> Result<&mut Self, RealtyError> {
        let mut tokens = BTreeSet::new();
        for status in statuses {
            tokens.insert(fields::status_token(status)?);
        }
        self.statuses = tokens;
        Ok(self)
    }

    /// Adds a property type to the filter. Repeated additions are
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unrecognized type; the
    /// builder is left untouched.
    pub fn add_property_type(&mut self, property_type: &str) -> Result<&mut Self, RealtyError> {
        let token = fields::property_type_token(property_type)?;
        self.property_types.insert(token);
        Ok(self)
    }

    /// List-price bounds. Either side may be open-ended; both `None`
    /// clears the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and
    /// min > max.
    pub fn set_price_range(
        &mut self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<&mut Self, RealtyError> {
        check_range("price", min, max)?;
        self.price_min = min;
        self.price_max = max;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and
    /// min > max.
    pub fn set_beds_range(
        &mut self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<&mut Self, RealtyError> {
        check_range("beds", min, max)?;
        self.beds_min = min;
        self.beds_max = max;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and
    /// min > max.
    pub fn set_baths_range(
        &mut self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<&mut Self, RealtyError> {
        check_range("baths", min, max)?;
        self.baths_min = min;
        self.baths_max = max;
        Ok(self)
    }

    /// Interior square-footage bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and
    /// min > max.
    pub fn set_sqft_range(
        &mut self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<&mut Self, RealtyError> {
        check_range("sqft", min, max)?;
        self.sqft_min = min;
        self.sqft_max = max;
        Ok(self)
    }

    /// Maximum monthly HOA fee; `Some(0)` means HOA-free listings only.
    pub fn set_hoa_max(&mut self, max: Option<u64>) -> &mut Self {
        self.hoa_max = max;
        self
    }

    /// Turns a feature constraint on or off.
    ///
    /// Enabled features accumulate their tag into the inclusion set.
    /// Disabling a feature drops the constraint, except for the senior
    /// community feature: an explicit `false` accumulates the tag into the
    /// exclusion set (filtering such listings out) instead.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unrecognized feature;
    /// the builder is left untouched.
    pub fn set_feature(&mut self, feature: &str, present: bool) -> Result<&mut Self, RealtyError> {
        let tag = fields::feature_tag(feature)?;
        if present {
            self.exclude_tags.remove(tag);
            self.tags.insert(tag);
        } else {
            self.tags.remove(tag);
            if tag == fields::SENIOR_COMMUNITY_TAG {
                self.exclude_tags.insert(tag);
            }
        }
        Ok(self)
    }

    /// Attaches a visitor id to the payload; absent unless set.
    pub fn set_visitor_id(&mut self, visitor_id: Option<&str>) -> &mut Self {
        self.visitor_id = visitor_id.map(str::to_owned);
        self
    }

    /// Renders the `variables.query` filter object. Deterministic: object
    /// keys serialize in sorted order and sets render sorted.
    #[must_use]
    pub fn filter_query(&self) -> Value {
        let mut filter = Map::new();
        filter.insert(
            "status".to_owned(),
            Value::Array(self.statuses.iter().map(|s| json!(s)).collect()),
        );
        filter.insert("primary".to_owned(), json!(true));

        if let Some(location) = &self.search_location {
            filter.insert(
                "search_location".to_owned(),
                json!({ "location": location }),
            );
        }
        if !self.property_types.is_empty() {
            filter.insert(
                "type".to_owned(),
                Value::Array(self.property_types.iter().map(|t| json!(t)).collect()),
            );
        }
        if let Some(range) = range_object(self.price_min, self.price_max) {
            filter.insert("list_price".to_owned(), range);
        }
        if let Some(range) = range_object(self.beds_min, self.beds_max) {
            filter.insert("beds".to_owned(), range);
        }
        if let Some(range) = range_object(self.baths_min, self.baths_max) {
            filter.insert("baths".to_owned(), range);
        }
        if let Some(range) = range_object(self.sqft_min, self.sqft_max) {
            filter.insert("sqft".to_owned(), range);
        }
        if let Some(max) = self.hoa_max {
            filter.insert("hoa_fee".to_owned(), json!({ "max": max }));
        }
        if !self.tags.is_empty() {
            filter.insert(
                "tags".to_owned(),
                Value::Array(self.tags.iter().map(|t| json!(t)).collect()),
            );
        }
        if !self.exclude_tags.is_empty() {
            filter.insert(
                "exclude_tags".to_owned(),
                Value::Array(self.exclude_tags.iter().map(|t| json!(t)).collect()),
            );
        }

        Value::Object(filter)
    }

    /// Renders the full POST payload.
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut variables = Map::new();
        variables.insert("query".to_owned(), self.filter_query());
        variables.insert(
            "client_data".to_owned(),
            json!({ "device_data": { "device_type": "web" }, "user_data": {} }),
        );
        variables.insert("limit".to_owned(), json!(self.limit));
        variables.insert("offset".to_owned(), json!(self.offset));
        if let Some((field, ascending)) = self.sort {
            variables.insert(
                "sort".to_owned(),
                json!({
                    "field": field,
                    "direction": if ascending { "asc" } else { "desc" },
                }),
            );
        }
        if let Some(sort_type) = self.sort_type {
            variables.insert("sort_type".to_owned(), json!(sort_type));
        }

        let mut payload = Map::new();
        payload.insert(
            "query".to_owned(),
            json!(defaults::GRAPHQL_LISTING_SEARCH_QUERY),
        );
        payload.insert("variables".to_owned(), Value::Object(variables));
        payload.insert("operationName".to_owned(), json!(defaults::OPERATION_NAME));
        payload.insert("callfrom".to_owned(), json!("SRP"));
        payload.insert("nrQueryType".to_owned(), json!("MAIN_SRP"));
        payload.insert("isClient".to_owned(), json!(true));
        if let Some(visitor_id) = &self.visitor_id {
            payload.insert("visitor_id".to_owned(), json!(visitor_id));
        }

        Value::Object(payload)
    }

    /// Renders the full POST request against the given site base URL.
    #[must_use]
    pub fn build_request(&self, base_url: &str) -> RenderedRequest {
        let url = format!("{base_url}{}", defaults::SEARCH_PATH);
        RenderedRequest::post_json(url, defaults::GRAPHQL_HEADER, self.payload()).with_query(
            defaults::POST_PARAMS
                .iter()
                .map(|(name, value)| (*name, (*value).to_owned()))
                .collect(),
        )
    }
}

fn range_object(min: Option<u64>, max: Option<u64>) -> Option<Value> {
    let mut range = Map::new();
    if let Some(min) = min {
        range.insert("min".to_owned(), json!(min));
    }
    if let Some(max) = max {
        range.insert("max".to_owned(), json!(max));
    }
    if range.is_empty() {
        None
    } else {
        Some(Value::Object(range))
    }
}

fn check_range(
    field: &'static str,
    min: Option<u64>,
    max: Option<u64>,
) -> Result<(), RealtyError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(RealtyError::InvalidRange { field, min, max });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
