//! Payload extraction: turning a raw response body into the site-native
//! nested JSON structure.
//!
//! Three embedding conventions are supported:
//! 1. direct JSON bodies,
//! 2. JSON serialized into the text of a `<script id="…">` element
//!    (server-side-rendering convention),
//! 3. a second, nested JSON-encoded string inside the script payload
//!    (Zillow double-serializes its `apiCache` field).

use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::RealtyError;

/// Decodes a body as JSON.
///
/// # Errors
///
/// Returns [`RealtyError::MalformedResponse`] if the body does not parse.
pub fn decode_json(body: &str, context: &str) -> Result<Value, RealtyError> {
    serde_json::from_str(body).map_err(|source| RealtyError::MalformedResponse {
        context: context.to_owned(),
        source,
    })
}

/// Locates `<script id="{element_id}">` in an HTML document and decodes its
/// text content as JSON.
///
/// `element_id` must be one of the fixed, CSS-safe ids the sites embed
/// (`hdpApolloPreloadedData`, `__NEXT_DATA__`).
///
/// # Errors
///
/// - [`RealtyError::ElementNotFound`] when the script element is absent:
///   the site's markup changed, or an error/interstitial page came back
///   instead of a listing page.
/// - [`RealtyError::MalformedResponse`] when the element text is not JSON.
pub fn script_json(html: &str, element_id: &str) -> Result<Value, RealtyError> {
    let document = Html::parse_document(html);
    let css = format!("script#{element_id}");
    let selector = Selector::parse(&css).expect("valid script-id selector");

    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| RealtyError::ElementNotFound {
            selector: css.clone(),
        })?;

    let text: String = element.text().collect();
    decode_json(&text, &css)
}

/// Decodes a JSON-encoded string field in place, mutating `value` so the
/// field holds the decoded structure instead of the doubly-serialized text.
///
/// # Errors
///
/// - [`RealtyError::UnexpectedSchema`] when `value` is not an object, the
///   field is absent, or the field is not a string.
/// - [`RealtyError::MalformedResponse`] when the inner decode fails.
pub fn decode_nested(value: &mut Value, field: &str) -> Result<(), RealtyError> {
    let object = value
        .as_object_mut()
        .ok_or_else(|| RealtyError::UnexpectedSchema {
            reason: format!("expected object while decoding nested field \"{field}\""),
        })?;

    let raw = match object.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(RealtyError::UnexpectedSchema {
                reason: format!("nested field \"{field}\" is not a JSON-encoded string"),
            })
        }
        None => {
            return Err(RealtyError::UnexpectedSchema {
                reason: format!("nested field \"{field}\" is absent"),
            })
        }
    };

    let decoded = decode_json(&raw, field)?;
    object.insert(field.to_owned(), decoded);
    Ok(())
}

/// Splits a cache object whose keys are dynamically-generated identifiers
/// distinguishable only by substring convention into the entry matching
/// `first_marker` and the entry matching `second_marker`.
///
/// Zillow's `apiCache` holds exactly one "…Variant…" key and one "…Full…"
/// key; the key text itself changes per request.
///
/// # Errors
///
/// Returns [`RealtyError::UnexpectedSchema`] when:
/// - `cache` is not an object,
/// - any key matches neither marker or both markers,
/// - either classification ends up without an entry.
pub fn partition_cache<'a>(
    cache: &'a Value,
    first_marker: &str,
    second_marker: &str,
) -> Result<(&'a Value, &'a Value), RealtyError> {
    let object = cache
        .as_object()
        .ok_or_else(|| RealtyError::UnexpectedSchema {
            reason: "cache is not an object".to_owned(),
        })?;

    let mut first: Option<&Value> = None;
    let mut second: Option<&Value> = None;

    for (key, entry) in object {
        match (key.contains(first_marker), key.contains(second_marker)) {
            (true, true) => {
                return Err(RealtyError::UnexpectedSchema {
                    reason: format!(
                        "cache key \"{key}\" matches both \"{first_marker}\" and \"{second_marker}\""
                    ),
                })
            }
            (true, false) => first = Some(entry),
            (false, true) => second = Some(entry),
            (false, false) => {
                return Err(RealtyError::UnexpectedSchema {
                    reason: format!(
                        "cache key \"{key}\" matches neither \"{first_marker}\" nor \"{second_marker}\""
                    ),
                })
            }
        }
    }

    match (first, second) {
        (Some(first), Some(second)) => Ok((first, second)),
        (None, _) => Err(RealtyError::UnexpectedSchema {
            reason: format!("cache has no \"{first_marker}\" entry"),
        }),
        (_, None) => Err(RealtyError::UnexpectedSchema {
            reason: format!("cache has no \"{second_marker}\" entry"),
        }),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
