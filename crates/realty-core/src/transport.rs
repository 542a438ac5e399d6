//! Thin HTTP transport adapter over `reqwest`.
//!
//! The transport sends exactly one request per call and surfaces the status
//! code and body untouched. It does not retry, rate-limit, or interpret
//! non-2xx statuses; the site clients decide what a given status means for
//! their endpoint.

use std::time::Duration;

use crate::error::RealtyError;
use crate::request::{Method, RenderedRequest};

/// Status code and raw body of a single exchange.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Returns the body when the status is 2xx, otherwise
    /// [`RealtyError::UnexpectedStatus`] naming the URL that failed.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::UnexpectedStatus`] for any non-2xx status.
    pub fn into_success_body(self, url: &str) -> Result<String, RealtyError> {
        if (200..300).contains(&self.status) {
            Ok(self.body)
        } else {
            Err(RealtyError::UnexpectedStatus {
                status: self.status,
                url: url.to_owned(),
            })
        }
    }
}

/// Blocking-style send/receive capability wrapped around a shared
/// `reqwest::Client`. Requests are issued strictly sequentially by the
/// callers; the transport itself holds no mutable state.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    /// Creates a transport with the given total and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64) -> Result<Self, RealtyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    /// Sends one rendered request and returns the status code plus body.
    ///
    /// # Errors
    ///
    /// Returns [`RealtyError::Http`] on a network-level failure (connection
    /// reset, timeout, TLS). Non-2xx statuses are NOT errors at this layer.
    pub async fn send(&self, request: &RenderedRequest) -> Result<Response, RealtyError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(url = %request.url, method = ?request.method, "sending request");

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_success_body_accepts_2xx() {
        let response = Response {
            status: 201,
            body: "ok".to_owned(),
        };
        assert_eq!(
            response.into_success_body("https://example.com").unwrap(),
            "ok"
        );
    }

    #[test]
    fn into_success_body_rejects_non_2xx() {
        let response = Response {
            status: 503,
            body: String::new(),
        };
        let err = response
            .into_success_body("https://example.com/search")
            .unwrap_err();
        match err {
            RealtyError::UnexpectedStatus { status, url } => {
                assert_eq!(status, 503);
                assert_eq!(url, "https://example.com/search");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }
}
