//! Schema-checked access over `serde_json::Value`.
//!
//! Site payloads are nested objects whose keys are only known by convention,
//! so the normalizers validate against a declared key set instead of doing
//! ad hoc lookups. Two validation strategies coexist deliberately:
//!
//! - `check_required_keys`: full pre-check; a failure names *every* missing
//!   key at once (Landwatch style).
//! - `require_*`: direct access; the *first* missing key fails immediately
//!   (Zillow / Realtor style).

use serde_json::Value;

use crate::error::RealtyError;

/// Verifies that every key in `expected` is present in `value`, failing with
/// a [`RealtyError::MissingFields`] that names the complete missing set.
///
/// # Errors
///
/// - [`RealtyError::UnexpectedSchema`] when `value` is not an object.
/// - [`RealtyError::MissingFields`] listing every absent key.
pub fn check_required_keys(
    value: &Value,
    expected: &[&str],
    context: &str,
) -> Result<(), RealtyError> {
    let object = value
        .as_object()
        .ok_or_else(|| RealtyError::UnexpectedSchema {
            reason: format!("{context} is not an object"),
        })?;

    let missing: Vec<String> = expected
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| (*key).to_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RealtyError::MissingFields {
            context: context.to_owned(),
            keys: missing,
        })
    }
}

/// Returns the value at `key`, failing immediately when absent.
///
/// # Errors
///
/// - [`RealtyError::UnexpectedSchema`] when `value` is not an object.
/// - [`RealtyError::MissingFields`] naming the single absent key.
pub fn require<'a>(value: &'a Value, key: &str, context: &str) -> Result<&'a Value, RealtyError> {
    let object = value
        .as_object()
        .ok_or_else(|| RealtyError::UnexpectedSchema {
            reason: format!("{context} is not an object"),
        })?;
    object
        .get(key)
        .ok_or_else(|| RealtyError::missing_key(context, key))
}

/// Walks a path of keys, failing on the first absent segment. The error
/// names the full dotted path up to the missing segment.
///
/// # Errors
///
/// As [`require`], per path segment.
pub fn pluck<'a>(value: &'a Value, path: &[&str], context: &str) -> Result<&'a Value, RealtyError> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        current = require(current, key, &dotted(context, &path[..=depth]))?;
    }
    Ok(current)
}

fn dotted(context: &str, path: &[&str]) -> String {
    if path.len() <= 1 {
        context.to_owned()
    } else {
        format!("{context}.{}", path[..path.len() - 1].join("."))
    }
}

/// Required string field.
///
/// # Errors
///
/// [`RealtyError::MissingFields`] when absent, [`RealtyError::UnexpectedSchema`]
/// when present but not a string.
pub fn require_str<'a>(value: &'a Value, key: &str, context: &str) -> Result<&'a str, RealtyError> {
    require(value, key, context)?
        .as_str()
        .ok_or_else(|| wrong_type(context, key, "string"))
}

/// Required integer field.
///
/// # Errors
///
/// As [`require_str`], expecting an integer.
pub fn require_i64(value: &Value, key: &str, context: &str) -> Result<i64, RealtyError> {
    require(value, key, context)?
        .as_i64()
        .ok_or_else(|| wrong_type(context, key, "integer"))
}

/// Required numeric field (integer or float).
///
/// # Errors
///
/// As [`require_str`], expecting a number.
pub fn require_f64(value: &Value, key: &str, context: &str) -> Result<f64, RealtyError> {
    require(value, key, context)?
        .as_f64()
        .ok_or_else(|| wrong_type(context, key, "number"))
}

/// Required boolean field.
///
/// # Errors
///
/// As [`require_str`], expecting a boolean.
pub fn require_bool(value: &Value, key: &str, context: &str) -> Result<bool, RealtyError> {
    require(value, key, context)?
        .as_bool()
        .ok_or_else(|| wrong_type(context, key, "boolean"))
}

/// Required-presence, nullable-value string field: the key must exist
/// (first-missing-fails) but an explicit `null` yields `None`.
///
/// # Errors
///
/// [`RealtyError::MissingFields`] when the key is absent,
/// [`RealtyError::UnexpectedSchema`] when present, non-null, and not a
/// string.
pub fn require_nullable_str<'a>(
    value: &'a Value,
    key: &str,
    context: &str,
) -> Result<Option<&'a str>, RealtyError> {
    match require(value, key, context)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(wrong_type(context, key, "string")),
    }
}

/// Required-presence, nullable-value integer field.
///
/// # Errors
///
/// As [`require_nullable_str`], expecting an integer.
pub fn require_nullable_i64(
    value: &Value,
    key: &str,
    context: &str,
) -> Result<Option<i64>, RealtyError> {
    match require(value, key, context)? {
        Value::Null => Ok(None),
        v => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| wrong_type(context, key, "integer")),
    }
}

/// Required-presence, nullable-value numeric field.
///
/// # Errors
///
/// As [`require_nullable_str`], expecting a number.
pub fn require_nullable_f64(
    value: &Value,
    key: &str,
    context: &str,
) -> Result<Option<f64>, RealtyError> {
    match require(value, key, context)? {
        Value::Null => Ok(None),
        v => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| wrong_type(context, key, "number")),
    }
}

/// Optional field access: absent keys and explicit `null` both yield `None`.
#[must_use]
pub fn optional<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Optional string, treating absent and `null` as `None`.
#[must_use]
pub fn optional_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    optional(value, key).and_then(Value::as_str)
}

/// Optional number, treating absent and `null` as `None`.
#[must_use]
pub fn optional_f64(value: &Value, key: &str) -> Option<f64> {
    optional(value, key).and_then(Value::as_f64)
}

fn wrong_type(context: &str, key: &str, expected: &'static str) -> RealtyError {
    RealtyError::UnexpectedSchema {
        reason: format!("{context}.{key} is not a {expected}"),
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
