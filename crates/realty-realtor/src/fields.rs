//! Realtor.com field registry: sort presets, statuses, property types, and
//! feature tags, mapped to the tokens the GraphQL filter understands.
//!
//! Lookups are pure and case-insensitive; unrecognized values fail with
//! [`RealtyError::InvalidValue`] listing the allowed set.

use realty_core::RealtyError;

/// Sort preset name → `sort.field` token. The "relevant" preset is not
/// here: it renders as `sort_type` instead of a field sort.
pub const SORT_FIELDS: &[(&str, &str)] = &[
    ("price", "list_price"),
    ("listing age", "list_date"),
    ("open house date", "open_house_date"),
    ("last reduced", "price_reduced_date"),
    ("interior sqft", "sqft"),
    ("lot_size", "lot_sqft"),
];

/// Listing status name → filter token.
pub const STATUSES: &[(&str, &str)] = &[
    ("For Sale", "for_sale"),
    ("Ready to Build", "ready_to_build"),
    ("For Rent", "for_rent"),
    ("Sold", "sold"),
    ("Off Market", "off_market"),
];

/// Property type name → filter token.
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("Single Family", "single_family"),
    ("Condo", "condos"),
    ("Townhome", "townhomes"),
    ("Multi-family", "multi_family"),
    ("Duplex / Triplex", "duplex_triplex"),
    ("Farm", "farm"),
    ("Land", "land"),
    ("Mobile", "mobile"),
    ("Co-op", "coop"),
];

/// Feature name → tag token. Selected features accumulate into the
/// filter's `tags` set.
pub const FEATURE_TAGS: &[(&str, &str)] = &[
    ("Swimming Pool", "swimming_pool"),
    ("Waterfront", "waterfront"),
    ("Garage 1+", "garage_1_or_more"),
    ("Garage 2+", "garage_2_or_more"),
    ("Garage 3+", "garage_3_or_more"),
    ("Central Air", "central_air"),
    ("Basement", "basement"),
    ("Fireplace", "fireplace"),
    ("Hardwood Floors", "hardwood_floors"),
    ("Single Story", "single_story"),
    ("Two or More Stories", "two_or_more_stories"),
    ("Senior Community", "senior_community"),
];

/// The one tag with exclusion semantics: explicitly turning the senior
/// community feature off filters such listings out rather than dropping
/// the constraint.
pub const SENIOR_COMMUNITY_TAG: &str = "senior_community";

fn lookup(
    table: &'static [(&'static str, &'static str)],
    category: &'static str,
    value: &str,
) -> Result<&'static str, RealtyError> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, token)| *token)
        .ok_or_else(|| RealtyError::InvalidValue {
            category,
            value: value.to_owned(),
            allowed: table.iter().map(|(name, _)| *name).collect(),
        })
}

fn reverse(
    table: &'static [(&'static str, &'static str)],
    token: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, t)| *t == token)
        .map(|(name, _)| *name)
}

/// Looks up the sort field for a preset name (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every field preset.
pub fn sort_field(preset: &str) -> Result<&'static str, RealtyError> {
    lookup(SORT_FIELDS, "sort preset", preset)
}

/// Reverse mapping of [`sort_field`].
#[must_use]
pub fn sort_preset_for_field(field: &str) -> Option<&'static str> {
    reverse(SORT_FIELDS, field)
}

/// Looks up the filter token for a listing status (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known status.
pub fn status_token(status: &str) -> Result<&'static str, RealtyError> {
    lookup(STATUSES, "status", status)
}

/// Reverse mapping of [`status_token`].
#[must_use]
pub fn status_for_token(token: &str) -> Option<&'static str> {
    reverse(STATUSES, token)
}

/// Looks up the filter token for a property type (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known type.
pub fn property_type_token(property_type: &str) -> Result<&'static str, RealtyError> {
    lookup(PROPERTY_TYPES, "property type", property_type)
}

/// Reverse mapping of [`property_type_token`].
#[must_use]
pub fn property_type_for_token(token: &str) -> Option<&'static str> {
    reverse(PROPERTY_TYPES, token)
}

/// Looks up the tag token for a feature name (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known feature.
pub fn feature_tag(feature: &str) -> Result<&'static str, RealtyError> {
    lookup(FEATURE_TAGS, "feature", feature)
}

/// Reverse mapping of [`feature_tag`].
#[must_use]
pub fn feature_for_tag(tag: &str) -> Option<&'static str> {
    reverse(FEATURE_TAGS, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registry_entry_round_trips() {
        for (name, field) in SORT_FIELDS {
            assert_eq!(sort_field(name).unwrap(), *field);
            assert_eq!(sort_preset_for_field(field), Some(*name));
        }
        for (name, token) in STATUSES {
            assert_eq!(status_token(name).unwrap(), *token);
            assert_eq!(status_for_token(token), Some(*name));
        }
        for (name, token) in PROPERTY_TYPES {
            assert_eq!(property_type_token(name).unwrap(), *token);
            assert_eq!(property_type_for_token(token), Some(*name));
        }
        for (name, tag) in FEATURE_TAGS {
            assert_eq!(feature_tag(name).unwrap(), *tag);
            assert_eq!(feature_for_tag(tag), Some(*name));
        }
    }

    #[test]
    fn lookups_are_case_insensitive() {
        assert_eq!(sort_field("PRICE").unwrap(), "list_price");
        assert_eq!(status_token("for sale").unwrap(), "for_sale");
        assert_eq!(feature_tag("swimming pool").unwrap(), "swimming_pool");
    }

    #[test]
    fn unknown_value_lists_the_allowed_set() {
        let err = property_type_token("castle").unwrap_err();
        match err {
            RealtyError::InvalidValue {
                category, allowed, ..
            } => {
                assert_eq!(category, "property type");
                assert_eq!(allowed.len(), PROPERTY_TYPES.len());
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
