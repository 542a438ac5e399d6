//! The rendered-request value object handed from a query builder to the
//! transport adapter.

use serde_json::Value;

/// HTTP method of a [`RenderedRequest`]. The site clients only ever issue
/// GETs and JSON POSTs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The output of rendering a query builder: everything the transport needs
/// to issue exactly one request.
///
/// Header sets are a per-site compatibility contract (the origin sites
/// reject or degrade requests without them), so they travel with the
/// request rather than living on the client.
#[derive(Debug, Clone)]
pub struct RenderedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// Query-string parameters appended (percent-encoded) at send time.
    /// Empty when the builder encodes everything into the URL itself.
    pub query: Vec<(&'static str, String)>,
    /// JSON body for POST requests; `None` for GETs.
    pub body: Option<Value>,
}

impl RenderedRequest {
    #[must_use]
    pub fn get(url: String, headers: &[(&'static str, &str)]) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: owned_headers(headers),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get_with_query(
        url: String,
        headers: &[(&'static str, &str)],
        query: Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: owned_headers(headers),
            query,
            body: None,
        }
    }

    #[must_use]
    pub fn post_json(url: String, headers: &[(&'static str, &str)], body: Value) -> Self {
        Self {
            method: Method::Post,
            url,
            headers: owned_headers(headers),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Adds query-string parameters to an already-built request.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }
}

fn owned_headers(headers: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    headers
        .iter()
        .map(|(name, value)| (*name, (*value).to_owned()))
        .collect()
}
