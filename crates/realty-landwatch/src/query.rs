//! Landwatch query builder: accumulates filter criteria and renders them as
//! URL path segments.
//!
//! The site's router is order-sensitive, so segments are always emitted in a
//! fixed order: location → property type → activity → price → size →
//! beds/baths → keywords → status flags → sale type → extra flags →
//! pagination. Rendering never mutates the builder; the same state renders
//! byte-identically every time, so a caller can re-render across pages.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use realty_core::{RealtyError, RenderedRequest};

use crate::fields;

pub const ROOT_URL: &str = "https://www.landwatch.com";

/// Fixed request headers for Landwatch search requests. The site degrades
/// requests without a browser-like profile, so these are reproduced
/// verbatim.
pub const HEADER: &[(&str, &str)] = &[
    ("authority", "www.landwatch.com"),
    ("accept", "*/*"),
    ("accept-language", "en-US,en;q=0.9"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
    ("sec-gpc", "1"),
    (
        "user-agent",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36",
    ),
];

/// Whether results are restricted to plain sales, auctions, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleType {
    /// Plain sales: the site default, rendered as no segment.
    #[default]
    Sale,
    /// Auction listings only.
    Auction,
    /// Both sales and auctions; no restriction is rendered.
    Both,
}

/// Listing status flags. The site default (available only) renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
    pub available: bool,
    pub under_contract: bool,
    pub off_market: bool,
    pub sold: bool,
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self {
            available: true,
            under_contract: false,
            off_market: false,
            sold: false,
        }
    }
}

/// Accumulates Landwatch filter criteria.
///
/// Location specifiers below the state are mutually exclusive in intent;
/// when several are set the builder does not reconcile them but renders with
/// the documented precedence city > county > region.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    base_url: Option<String>,

    state: Option<&'static str>,
    region: Option<String>,
    county: Option<String>,
    city: Option<String>,

    property_types: BTreeSet<String>,
    activity: Option<&'static str>,

    price_min: Option<u64>,
    price_max: Option<u64>,
    acres_min: Option<u64>,
    acres_max: Option<u64>,
    beds_min: Option<u64>,
    beds_max: Option<u64>,
    baths_min: Option<u64>,
    baths_max: Option<u64>,

    keywords: Vec<String>,

    status: StatusFlags,
    sale_type: SaleType,

    owner_financing: bool,
    mineral_rights: bool,
    virtual_tour: bool,

    page: u32,
}

impl SearchQuery {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    /// Points rendering at a different origin (used to run against a local
    /// stub server in tests).
    pub fn set_base_url(&mut self, base_url: &str) -> &mut Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_owned());
        self
    }

    /// Restricts results to a state, validated against the field registry.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unknown state.
    pub fn set_state(&mut self, state: &str) -> Result<&mut Self, RealtyError> {
        self.state = Some(fields::state_slug(state)?);
        Ok(self)
    }

    /// Region name, without any "Region" suffix (e.g. `"East"`).
    pub fn set_region(&mut self, region: &str) -> &mut Self {
        self.region = Some(fields::location_slug(region));
        self
    }

    /// County name, without any "County" suffix (e.g. `"Hamilton"`).
    pub fn set_county(&mut self, county: &str) -> &mut Self {
        self.county = Some(fields::location_slug(county));
        self
    }

    pub fn set_city(&mut self, city: &str) -> &mut Self {
        self.city = Some(fields::location_slug(city));
        self
    }

    /// Adds a property type to the selected set. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unknown type.
    pub fn add_property_type(&mut self, property_type: &str) -> Result<&mut Self, RealtyError> {
        fields::property_type_id(property_type)?;
        self.property_types.insert(property_type.to_owned());
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] for an unknown activity.
    pub fn set_activity(&mut self, activity: &str) -> Result<&mut Self, RealtyError> {
        self.activity = Some(fields::activity_slug(activity)?);
        Ok(self)
    }

    /// Price bounds in dollars. Either side may be `None` for an open end;
    /// both `None` clears the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and min > max.
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

    /// Parcel size bounds in acres.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and min > max.
    pub fn set_acres_range(
        &mut self,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<&mut Self, RealtyError> {
        check_range("acres", min, max)?;
        self.acres_min = min;
        self.acres_max = max;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidRange`] when both are set and min > max.
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
    /// Returns [`RealtyError::InvalidRange`] when both are set and min > max.
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

    pub fn add_keyword(&mut self, keyword: &str) -> &mut Self {
        let slug = fields::location_slug(keyword);
        if !slug.is_empty() && !self.keywords.contains(&slug) {
            self.keywords.push(slug);
        }
        self
    }

    pub fn set_status(&mut self, status: StatusFlags) -> &mut Self {
        self.status = status;
        self
    }

    pub fn set_sale_type(&mut self, sale_type: SaleType) -> &mut Self {
        self.sale_type = sale_type;
        self
    }

    pub fn set_owner_financing(&mut self, owner_financing: bool) -> &mut Self {
        self.owner_financing = owner_financing;
        self
    }

    pub fn set_mineral_rights(&mut self, mineral_rights: bool) -> &mut Self {
        self.mineral_rights = mineral_rights;
        self
    }

    pub fn set_virtual_tour(&mut self, virtual_tour: bool) -> &mut Self {
        self.virtual_tour = virtual_tour;
        self
    }

    /// Sets the results page. Page 1 renders no pagination segment.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidPage`] when `page < 1`.
    pub fn set_page(&mut self, page: i64) -> Result<&mut Self, RealtyError> {
        if page < 1 {
            return Err(RealtyError::InvalidPage { page });
        }
        self.page = u32::try_from(page).map_err(|_| RealtyError::InvalidPage { page })?;
        Ok(self)
    }

    /// Renders the current state into the filter URL. Deterministic and
    /// non-mutating.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::InvalidValue`] only if the property-type set
    /// was bypassed with unvalidated values (not possible through the
    /// public setters).
    pub fn create_url(&self) -> Result<String, RealtyError> {
        let mut url = self
            .base_url
            .clone()
            .unwrap_or_else(|| ROOT_URL.to_owned());

        // Location. A query with no state and no property type targets the
        // generic /land index, mirroring the site's own default route.
        if self.state.is_none() && self.property_types.is_empty() {
            url.push_str("/land");
        }
        if let Some(state) = self.state {
            let _ = write!(url, "/{state}");
        }
        // Precedence city > county > region; contradictory combinations are
        // rendered, not reconciled.
        if let Some(city) = &self.city {
            let _ = write!(url, "/{city}");
        } else if let Some(county) = &self.county {
            let _ = write!(url, "/{county}-county");
        } else if let Some(region) = &self.region {
            let _ = write!(url, "/{region}-region");
        }

        if let Some(token) = fields::combine_property_types(&self.property_types)? {
            let _ = write!(url, "/type-{token}");
        }

        if let Some(activity) = self.activity {
            let _ = write!(url, "/{activity}-activity");
        }

        url.push_str(&range_segment("price", self.price_min, self.price_max));
        url.push_str(&range_segment("acres", self.acres_min, self.acres_max));
        url.push_str(&range_segment("beds", self.beds_min, self.beds_max));
        url.push_str(&range_segment("baths", self.baths_min, self.baths_max));

        if !self.keywords.is_empty() {
            let _ = write!(url, "/keyword-{}", self.keywords.join(","));
        }

        // Status flags: the default state (available only) is the site
        // default and renders nothing.
        if self.status != StatusFlags::default() {
            if self.status.available {
                url.push_str("/available");
            }
            if self.status.under_contract {
                url.push_str("/under-contract");
            }
            if self.status.off_market {
                url.push_str("/off-market");
            }
            if self.status.sold {
                url.push_str("/sold");
            }
        }

        // Sale type: plain sales are the default route; "both" lifts the
        // restriction entirely, so only auctions emit a segment.
        if self.sale_type == SaleType::Auction {
            url.push_str("/auctions");
        }

        if self.owner_financing {
            url.push_str("/owner-financing");
        }
        if self.mineral_rights {
            url.push_str("/mineral-rights");
        }
        if self.virtual_tour {
            url.push_str("/virtual-tour");
        }

        if self.page >= 2 {
            let _ = write!(url, "/page-{}", self.page);
        }

        Ok(url)
    }

    /// Renders the request: a GET on [`create_url`](Self::create_url) with
    /// the fixed header set.
    ///
    /// # Errors
    ///
    /// As [`create_url`](Self::create_url).
    pub fn build_request(&self) -> Result<RenderedRequest, RealtyError> {
        Ok(RenderedRequest::get(self.create_url()?, HEADER))
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

/// Renders a min/max pair as a path segment. Both bounds →
/// `/name-min-max`; only max → `/name-under-max`; only min →
/// `/name-over-min`; neither → nothing.
fn range_segment(name: &str, min: Option<u64>, max: Option<u64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("/{name}-{min}-{max}"),
        (None, Some(max)) => format!("/{name}-under-{max}"),
        (Some(min), None) => format!("/{name}-over-{min}"),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
