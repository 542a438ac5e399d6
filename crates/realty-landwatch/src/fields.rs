//! Landwatch field registry: canonical mappings between human-readable
//! filter values and the URL path tokens the site's router expects.
//!
//! All lookups are pure. Unrecognized values fail with
//! [`RealtyError::InvalidValue`] listing the allowed set.

use std::collections::BTreeSet;

use realty_core::RealtyError;

/// State name → URL slug. The router addresses states by hyphenated
/// lowercase name, not postal code.
pub const STATES: &[(&str, &str)] = &[
    ("Alabama", "alabama"),
    ("Alaska", "alaska"),
    ("Arizona", "arizona"),
    ("Arkansas", "arkansas"),
    ("California", "california"),
    ("Colorado", "colorado"),
    ("Connecticut", "connecticut"),
    ("Delaware", "delaware"),
    ("Florida", "florida"),
    ("Georgia", "georgia"),
    ("Hawaii", "hawaii"),
    ("Idaho", "idaho"),
    ("Illinois", "illinois"),
    ("Indiana", "indiana"),
    ("Iowa", "iowa"),
    ("Kansas", "kansas"),
    ("Kentucky", "kentucky"),
    ("Louisiana", "louisiana"),
    ("Maine", "maine"),
    ("Maryland", "maryland"),
    ("Massachusetts", "massachusetts"),
    ("Michigan", "michigan"),
    ("Minnesota", "minnesota"),
    ("Mississippi", "mississippi"),
    ("Missouri", "missouri"),
    ("Montana", "montana"),
    ("Nebraska", "nebraska"),
    ("Nevada", "nevada"),
    ("New Hampshire", "new-hampshire"),
    ("New Jersey", "new-jersey"),
    ("New Mexico", "new-mexico"),
    ("New York", "new-york"),
    ("North Carolina", "north-carolina"),
    ("North Dakota", "north-dakota"),
    ("Ohio", "ohio"),
    ("Oklahoma", "oklahoma"),
    ("Oregon", "oregon"),
    ("Pennsylvania", "pennsylvania"),
    ("Rhode Island", "rhode-island"),
    ("South Carolina", "south-carolina"),
    ("South Dakota", "south-dakota"),
    ("Tennessee", "tennessee"),
    ("Texas", "texas"),
    ("Utah", "utah"),
    ("Vermont", "vermont"),
    ("Virginia", "virginia"),
    ("Washington", "washington"),
    ("West Virginia", "west-virginia"),
    ("Wisconsin", "wisconsin"),
    ("Wyoming", "wyoming"),
];

/// Property type → per-value id. The site decodes a single numeric filter
/// formed by summing the ids of every selected type (bitmask-style), so the
/// ids are powers of two.
pub const PROPERTY_TYPES: &[(&str, u32)] = &[
    ("Commercial", 1),
    ("Farms and Ranches", 2),
    ("Homesite", 4),
    ("Horse", 8),
    ("House", 16),
    ("Hunting", 32),
    ("Lakefront", 64),
    ("Oceanfront", 128),
    ("Recreational", 256),
    ("Riverfront", 512),
    ("Timberland", 1024),
    ("Undeveloped", 2048),
    ("Waterfront", 4096),
];

/// Activity filter → URL slug.
pub const ACTIVITIES: &[(&str, &str)] = &[
    ("Boating", "boating"),
    ("Camping", "camping"),
    ("Fishing", "fishing"),
    ("Horseback Riding", "horseback-riding"),
    ("Hunting", "hunting"),
    ("Off-Roading", "off-roading"),
    ("RVing", "rving"),
];

/// Looks up the URL slug for a state name (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known state.
pub fn state_slug(state: &str) -> Result<&'static str, RealtyError> {
    STATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(state))
        .map(|(_, slug)| *slug)
        .ok_or_else(|| RealtyError::InvalidValue {
            category: "state",
            value: state.to_owned(),
            allowed: STATES.iter().map(|(name, _)| *name).collect(),
        })
}

/// Reverse mapping of [`state_slug`].
#[must_use]
pub fn state_for_slug(slug: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(_, s)| *s == slug)
        .map(|(name, _)| *name)
}

/// Looks up the numeric id for a property type (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known type.
pub fn property_type_id(property_type: &str) -> Result<u32, RealtyError> {
    PROPERTY_TYPES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(property_type))
        .map(|(_, id)| *id)
        .ok_or_else(|| RealtyError::InvalidValue {
            category: "property type",
            value: property_type.to_owned(),
            allowed: PROPERTY_TYPES.iter().map(|(name, _)| *name).collect(),
        })
}

/// Reverse mapping of [`property_type_id`].
#[must_use]
pub fn property_type_for_id(id: u32) -> Option<&'static str> {
    PROPERTY_TYPES
        .iter()
        .find(|(_, i)| *i == id)
        .map(|(name, _)| *name)
}

/// Combines a set of selected property types into the single encoded token
/// the router expects, or `None` when the set is empty.
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] for any unrecognized member.
pub fn combine_property_types(types: &BTreeSet<String>) -> Result<Option<u32>, RealtyError> {
    if types.is_empty() {
        return Ok(None);
    }
    let mut sum = 0;
    for t in types {
        sum += property_type_id(t)?;
    }
    Ok(Some(sum))
}

/// Looks up the URL slug for an activity filter (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known activity.
pub fn activity_slug(activity: &str) -> Result<&'static str, RealtyError> {
    ACTIVITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(activity))
        .map(|(_, slug)| *slug)
        .ok_or_else(|| RealtyError::InvalidValue {
            category: "activity",
            value: activity.to_owned(),
            allowed: ACTIVITIES.iter().map(|(name, _)| *name).collect(),
        })
}

/// Reverse mapping of [`activity_slug`].
#[must_use]
pub fn activity_for_slug(slug: &str) -> Option<&'static str> {
    ACTIVITIES
        .iter()
        .find(|(_, s)| *s == slug)
        .map(|(name, _)| *name)
}

/// Lowercases a free-form location name and hyphenates spaces, the way the
/// router addresses cities, counties, and regions.
#[must_use]
pub fn location_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
