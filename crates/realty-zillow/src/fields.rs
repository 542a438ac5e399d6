//! Zillow field registry: home-type names mapped to the `filterState` flags
//! the search endpoint understands.
//!
//! Lookups are pure and case-insensitive; unrecognized values fail with
//! [`RealtyError::InvalidValue`] listing the allowed set.

use realty_core::RealtyError;

/// Home type name → `filterState` flag. Selecting a type renders
/// `{"<flag>": {"value": true}}` into the search query state.
pub const HOME_TYPES: &[(&str, &str)] = &[
    ("House", "isSingleFamily"),
    ("Townhome", "isTownhouse"),
    ("Condo", "isCondo"),
    ("Apartment", "isApartment"),
    ("Manufactured", "isManufactured"),
    ("Lot / Land", "isLotLand"),
    ("Multi-family", "isMultiFamily"),
];

/// Looks up the `filterState` flag for a home type (case-insensitive).
///
/// # Errors
///
/// Returns [`RealtyError::InvalidValue`] listing every known home type.
pub fn home_type_flag(home_type: &str) -> Result<&'static str, RealtyError> {
    HOME_TYPES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(home_type))
        .map(|(_, flag)| *flag)
        .ok_or_else(|| RealtyError::InvalidValue {
            category: "home type",
            value: home_type.to_owned(),
            allowed: HOME_TYPES.iter().map(|(name, _)| *name).collect(),
        })
}

/// Reverse mapping of [`home_type_flag`].
#[must_use]
pub fn home_type_for_flag(flag: &str) -> Option<&'static str> {
    HOME_TYPES
        .iter()
        .find(|(_, f)| *f == flag)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_home_type_round_trips() {
        for (name, flag) in HOME_TYPES {
            assert_eq!(home_type_flag(name).unwrap(), *flag);
            assert_eq!(home_type_for_flag(flag), Some(*name));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(home_type_flag("townhome").unwrap(), "isTownhouse");
        assert_eq!(home_type_flag("CONDO").unwrap(), "isCondo");
    }

    #[test]
    fn unknown_home_type_lists_the_allowed_set() {
        let err = home_type_flag("castle").unwrap_err();
        match err {
            RealtyError::InvalidValue {
                category,
                value,
                allowed,
            } => {
                assert_eq!(category, "home type");
                assert_eq!(value, "castle");
                assert_eq!(allowed.len(), HOME_TYPES.len());
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
