//! Unit-bearing quantity parsing shared by the listing normalizers.

use crate::error::RealtyError;

/// Square feet per acre.
pub const SQFT_PER_ACRE: f64 = 43_560.0;

/// Converts acres to square feet using the fixed factor 1 acre = 43,560 sqft.
#[must_use]
pub fn acres_to_sqft(acres: f64) -> f64 {
    acres * SQFT_PER_ACRE
}

/// Parses a lot-size string into square feet.
///
/// Unit-specific behavior:
/// - an acreage token (`"5 Acres"`, `"1.5 acres"`) converts via
///   [`acres_to_sqft`],
/// - a square-footage token (`"2000 sqft"`, `"8,712 sq ft"`,
///   `"2000 Square Feet"`) parses the numeric value directly,
/// - empty or whitespace-only input yields `None` (absent lot size is not
///   an error),
/// - any other format fails.
///
/// # Errors
///
/// Returns [`RealtyError::InvalidQuantity`] when the string carries an
/// unrecognized unit or no parseable number.
pub fn parse_lot_size(lot_size: &str) -> Result<Option<f64>, RealtyError> {
    let trimmed = lot_size.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let lower = trimmed.to_lowercase();

    let numeric = if let Some(rest) = strip_unit(&lower, &["acres", "acre"]) {
        parse_number(rest, lot_size)?.map(acres_to_sqft)
    } else if let Some(rest) = strip_unit(&lower, &["sqft", "sq ft", "square feet"]) {
        parse_number(rest, lot_size)?
    } else {
        return Err(invalid(lot_size));
    };

    numeric.map_or_else(|| Err(invalid(lot_size)), |n| Ok(Some(n)))
}

/// Strips the first matching unit token, returning the remaining text when
/// one of `units` occurs in `lower`.
fn strip_unit(lower: &str, units: &[&str]) -> Option<String> {
    units
        .iter()
        .find(|unit| lower.contains(**unit))
        .map(|unit| lower.replacen(unit, "", 1))
}

fn parse_number(text: String, original: &str) -> Result<Option<f64>, RealtyError> {
    let cleaned: String = text.replace(',', " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(invalid(original));
    }
    // Commas were turned into spaces; rejoin digit groups like "8 712".
    let compact: String = cleaned.split_whitespace().collect();
    compact
        .parse::<f64>()
        .map(Some)
        .map_err(|_| invalid(original))
}

fn invalid(value: &str) -> RealtyError {
    RealtyError::InvalidQuantity {
        value: value.to_owned(),
        expected: "a number followed by an acreage or square-footage unit",
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
