//! Zillow search query builder.
//!
//! The search endpoint takes its entire filter state as two JSON documents
//! (`searchQueryState` and `wants`) encoded into GET query-string
//! parameters. Rendering never mutates the builder; the same state renders
//! byte-identically every time, so a caller can re-render across pages.

use std::collections::BTreeSet;

use serde_json::{json, Map, Value};

use realty_core::{RealtyError, RenderedRequest};

use crate::fields;
use crate::headers;

pub const ROOT_URL: &str = "https://www.zillow.com";
pub const SEARCH_PATH: &str = "/search/GetSearchPageState.htm";

/// Listing category driving the `filterState` for-rent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Sale listings: the site default, rendered as no flag.
    #[default]
    ForSale,
    /// Rental listings.
    ForRent,
}

/// Map viewport bounds, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

/// Accumulated search criteria, rendered on demand.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    page: i64,
    search_term: Option<String>,
    map_bounds: Option<MapBounds>,
    region: Option<(i64, i64)>,
    map_visible: bool,
    list_visible: bool,
    map_zoom: i64,
    category: Category,
    home_types: BTreeSet<String>,
    wants: Value,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search_term: None,
            map_bounds: None,
            region: None,
            map_visible: true,
            list_visible: true,
            map_zoom: 11,
            category: Category::ForSale,
            home_types: BTreeSet::new(),
            wants: json!({
                "cat1": ["listResults", "mapResults"],
                "cat2": ["total"],
            }),
        }
    }
}

impl SearchQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page of paginated results. Pages are 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidPage`] for pages below 1; the builder
    /// is left untouched.
    pub fn set_page(&mut self, page: i64) -> Result<&mut Self, RealtyError> {
        if page < 1 {
            return Err(RealtyError::InvalidPage { page });
        }
        self.page = page;
        Ok(self)
    }

    /// Sets the free-text search term (an address, city, or ZIP).
    pub fn set_search_term(&mut self, term: &str) -> &mut Self {
        self.search_term = Some(term.to_owned());
        self
    }

    /// Restricts results to a map viewport.
    pub fn set_map_bounds(&mut self, west: f64, east: f64, south: f64, north: f64) -> &mut Self {
        self.map_bounds = Some(MapBounds {
            west,
            east,
            south,
            north,
        });
        self
    }

    /// Restricts results to a site-internal region. Region ids and types
    /// are not enumerable from outside; they come from observed traffic.
    pub fn set_region(&mut self, region_id: i64, region_type: i64) -> &mut Self {
        self.region = Some((region_id, region_type));
        self
    }

    pub fn set_map_visible(&mut self, visible: bool) -> &mut Self {
        self.map_visible = visible;
        self
    }

    pub fn set_list_visible(&mut self, visible: bool) -> &mut Self {
        self.list_visible = visible;
        self
    }

    pub fn set_map_zoom(&mut self, zoom: i64) -> &mut Self {
        self.map_zoom = zoom;
        self
    }

    /// Switches between sale and rental listings.
    pub fn set_category(&mut self, category: Category) -> &mut Self {
        self.category = category;
        self
    }

    /// Adds a home type to the filter. Repeated additions are deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unrecognized home type;
    /// the builder is left untouched.
    pub fn add_home_type(&mut self, home_type: &str) -> Result<&mut Self, RealtyError> {
        let flag = fields::home_type_flag(home_type)?;
        self.home_types.insert(flag.to_owned());
        Ok(self)
    }

    /// Replaces the `wants` document controlling which result sections the
    /// endpoint returns.
    pub fn set_wants(&mut self, wants: Value) -> &mut Self {
        self.wants = wants;
        self
    }

    /// Renders the `searchQueryState` document. Deterministic: object keys
    /// serialize in sorted order.
    #[must_use]
    pub fn search_query_state(&self) -> Value {
        let mut state = Map::new();
        state.insert("pagination".to_owned(), json!({ "currentPage": self.page }));
        state.insert(
            "isMapVisible".to_owned(),
            Value::String(bool_str(self.map_visible).to_owned()),
        );
        state.insert(
            "isListVisible".to_owned(),
            Value::String(bool_str(self.list_visible).to_owned()),
        );
        state.insert("mapZoom".to_owned(), json!(self.map_zoom));

        if let Some(term) = &self.search_term {
            state.insert("usersSearchTerm".to_owned(), json!(term));
        }
        if let Some(bounds) = self.map_bounds {
            state.insert(
                "mapBounds".to_owned(),
                json!({
                    "west": bounds.west,
                    "east": bounds.east,
                    "south": bounds.south,
                    "north": bounds.north,
                }),
            );
        }
        if let Some((region_id, region_type)) = self.region {
            state.insert(
                "regionSelection".to_owned(),
                json!([{ "regionId": region_id, "regionType": region_type }]),
            );
        }
        if let Some(filter) = self.filter_state() {
            state.insert("filterState".to_owned(), Value::Object(filter));
        }

        Value::Object(state)
    }

    /// The `filterState` object, or `None` when every filter is at its
    /// default (for-sale, no home-type restriction).
    fn filter_state(&self) -> Option<Map<String, Value>> {
        if self.category == Category::ForSale && self.home_types.is_empty() {
            return None;
        }
        let mut filter = Map::new();
        if self.category == Category::ForRent {
            filter.insert("isForRent".to_owned(), json!({ "value": true }));
        }
        for flag in &self.home_types {
            filter.insert(flag.clone(), json!({ "value": true }));
        }
        Some(filter)
    }

    /// Renders the two JSON-encoded query-string parameters.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("searchQueryState", self.search_query_state().to_string()),
            ("wants", self.wants.to_string()),
        ]
    }

    /// Renders the full GET request against the given search endpoint URL.
    #[must_use]
    pub fn build_request(&self, search_url: &str) -> RenderedRequest {
        RenderedRequest::get_with_query(
            search_url.to_owned(),
            headers::HEADER,
            self.query_params(),
        )
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
