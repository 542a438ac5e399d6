use thiserror::Error;

/// Error taxonomy shared by every site client.
///
/// Validation variants (`InvalidValue`, `InvalidPage`, `InvalidRange`) are
/// raised at the setter call site, before any network I/O. The response-side
/// variants distinguish "the site changed" (`ElementNotFound`,
/// `UnexpectedSchema`, `MissingFields`) from "the body does not parse"
/// (`MalformedResponse`) so callers can tell schema drift apart from bad
/// input. Nothing here is retried; every failure propagates to the caller.
#[derive(Debug, Error)]
pub enum RealtyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid {category} \"{value}\" (allowed: {})", .allowed.join(", "))]
    InvalidValue {
        category: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("page number must be >= 1, was {page}")]
    InvalidPage { page: i64 },

    #[error("invalid {field} range: min {min} exceeds max {max}")]
    InvalidRange { field: &'static str, min: u64, max: u64 },

    #[error("malformed response for {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("unexpected schema: {reason}")]
    UnexpectedSchema { reason: String },

    #[error("{context} is missing required keys: {}", .keys.join(", "))]
    MissingFields { context: String, keys: Vec<String> },

    #[error("cannot parse quantity \"{value}\" (expected {expected})")]
    InvalidQuantity {
        value: String,
        expected: &'static str,
    },

    #[error("dispatch error: {reason}")]
    Dispatch { reason: String },
}

impl RealtyError {
    /// Shorthand for a single-key [`RealtyError::MissingFields`], used by the
    /// direct-access normalizers that fail on the first absent key.
    #[must_use]
    pub fn missing_key(context: &str, key: &str) -> Self {
        RealtyError::MissingFields {
            context: context.to_owned(),
            keys: vec![key.to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_lists_allowed_set() {
        let err = RealtyError::InvalidValue {
            category: "property type",
            value: "Castle".to_owned(),
            allowed: vec!["House", "Homesite"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Castle"));
        assert!(msg.contains("House, Homesite"));
    }

    #[test]
    fn missing_fields_names_every_key() {
        let err = RealtyError::MissingFields {
            context: "property_result".to_owned(),
            keys: vec!["price".to_owned(), "acres".to_owned()],
        };
        assert!(err.to_string().contains("price, acres"));
    }

    #[test]
    fn missing_key_builds_single_entry() {
        let err = RealtyError::missing_key("property", "zpid");
        match err {
            RealtyError::MissingFields { keys, .. } => assert_eq!(keys, vec!["zpid"]),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }
}
