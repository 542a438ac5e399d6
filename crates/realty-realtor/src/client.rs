//! HTTP client for Realtor.com searches, detail pages, and the payment
//! and noise endpoints.

use serde_json::Value;

use realty_core::extract::{decode_json, script_json};
use realty_core::schema::{optional_str, pluck, require};
use realty_core::{RealtyError, RenderedRequest, Transport};

use crate::defaults;
use crate::details::SaleRecord;
use crate::query::SearchQuery;
use crate::types::{HomeSearch, SaleStub};

/// Client for the GraphQL search endpoint and the REST side endpoints.
///
/// Holds the shared transport and the site base URL; queries carry
/// everything else, so one client serves any number of them.
pub struct RealtorClient {
    transport: Transport,
    base_url: String,
}

impl RealtorClient {
    /// # Errors
    ///
    /// Returns [`RealtyError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, RealtyError> {
        Self::with_base_url(timeout_secs, defaults::ROOT_URL)
    }

    /// A client addressing a different host, e.g. a local test server.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn with_base_url(
        timeout_secs: u64,
        base_url: impl Into<String>,
    ) -> Result<Self, RealtyError> {
        Ok(Self {
            transport: Transport::new(timeout_secs)?,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs a search and returns the full decoded GraphQL envelope.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::UnexpectedStatus`] for non-2xx responses.
    /// - [`RealtyError::MalformedResponse`] when the body is not JSON.
    pub async fn search_full(&self, search: &SearchQuery) -> Result<Value, RealtyError> {
        let request = search.build_request(&self.base_url);
        let response = self.transport.send(&request).await?;
        let body = response.into_success_body(&request.url)?;
        decode_json(&body, "realtor search response")
    }

    /// Runs a search and returns the typed `data.home_search` envelope.
    ///
    /// # Errors
    ///
    /// As [`search_full`](Self::search_full), plus
    /// [`RealtyError::MissingFields`] when the `data.home_search` path is
    /// absent and [`RealtyError::MalformedResponse`] when it has the wrong
    /// shape.
    pub async fn search(&self, search: &SearchQuery) -> Result<HomeSearch, RealtyError> {
        let envelope = self.search_full(search).await?;
        let home_search = pluck(&envelope, &["data", "home_search"], "realtor search response")?;
        let home_search = HomeSearch::from_value(home_search.clone())?;
        tracing::debug!(
            count = home_search.count,
            total = home_search.total,
            "realtor search returned results"
        );
        Ok(home_search)
    }

    /// Runs a search and reduces every result to a [`SaleStub`].
    ///
    /// # Errors
    ///
    /// As [`search`](Self::search), plus any stub-extraction failure.
    pub async fn search_stubs(&self, search: &SearchQuery) -> Result<Vec<SaleStub>, RealtyError> {
        self.search(search).await?.stubs()
    }

    /// Fetches and normalizes a sale detail page, then fills in its noise
    /// summary from the noise endpoint.
    ///
    /// # Errors
    ///
    /// Transport and status failures, plus any extraction failure from
    /// the page or the [`SaleRecord`] normalizer.
    pub async fn sale_details(&self, detail_url: &str) -> Result<SaleRecord, RealtyError> {
        let request = RenderedRequest::get(detail_url.to_owned(), defaults::HEADER);
        let response = self.transport.send(&request).await?;
        let html = response.into_success_body(detail_url)?;

        let ndata = script_json(&html, "__NEXT_DATA__")?;
        let details = pluck(
            &ndata,
            &["props", "pageProps", "initialState", "propertyDetails"],
            "realtor detail page",
        )?;
        let mut record = SaleRecord::from_details(details)?;

        if let Some(noise) = self.noise_metrics(record.latitude, record.longitude).await? {
            record.noise = noise;
        }
        Ok(record)
    }

    /// Fetches the noise summary for a coordinate pair. Returns `None`
    /// when the endpoint has no text for the location.
    ///
    /// # Errors
    ///
    /// Transport and status failures, plus
    /// [`RealtyError::MalformedResponse`] / [`RealtyError::MissingFields`]
    /// when the response carries no `result` object.
    pub async fn noise_metrics(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, RealtyError> {
        let url = format!("{}{}", self.base_url, defaults::NOISE_PATH);
        let request = RenderedRequest::get(url.clone(), &[]).with_query(vec![
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
        ]);
        let response = self.transport.send(&request).await?;
        let body = response.into_success_body(&url)?;
        let envelope = decode_json(&body, "realtor noise response")?;
        let result = require(&envelope, "result", "realtor noise response")?;
        Ok(optional_str(result, "local_text").map(str::to_owned))
    }

    /// Fetches the site's loan estimate for the given purchase terms and
    /// returns the raw `results` object.
    ///
    /// # Errors
    ///
    /// Transport and status failures, plus
    /// [`RealtyError::MalformedResponse`] / [`RealtyError::MissingFields`]
    /// when the response carries no `results` object.
    pub async fn loan_estimates(
        &self,
        home_price: i64,
        down_payment: i64,
        fips: &str,
        state_code: &str,
        yearly_property_tax: f64,
        hoa_fee: f64,
    ) -> Result<Value, RealtyError> {
        let url = format!("{}{}", self.base_url, defaults::LOAN_PATH);
        let request = RenderedRequest::get(url.clone(), &[]).with_query(vec![
            ("hoa_fees", hoa_fee.to_string()),
            ("fips", fips.to_owned()),
            ("state", state_code.to_owned()),
            ("home_price", home_price.to_string()),
            ("down_payment", down_payment.to_string()),
            ("veterans_benefits", "false".to_owned()),
            ("property_tax", yearly_property_tax.to_string()),
            ("is_fees_included", "true".to_owned()),
            ("app_name", "realtor_dot_com".to_owned()),
            ("app_version", "0.0.1".to_owned()),
        ]);
        let response = self.transport.send(&request).await?;
        let body = response.into_success_body(&url)?;
        let envelope = decode_json(&body, "realtor loan response")?;
        Ok(require(&envelope, "results", "realtor loan response")?.clone())
    }

    /// Fetches the site's estimated monthly payment for a record. The
    /// down payment defaults to 20% of the list price.
    ///
    /// # Errors
    ///
    /// - [`RealtyError::MissingFields`] when the record carries no FIPS
    ///   code or the response carries no payment figure.
    /// - Otherwise as [`loan_estimates`](Self::loan_estimates).
    pub async fn estimated_monthly_payment(
        &self,
        record: &SaleRecord,
        down_payment: Option<i64>,
    ) -> Result<f64, RealtyError> {
        let fips = record
            .fips
            .as_deref()
            .ok_or_else(|| RealtyError::missing_key("realtor property", "fips_code"))?;
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let down_payment =
            down_payment.unwrap_or_else(|| (record.price as f64 * 0.2).round() as i64);

        let results = self
            .loan_estimates(
                record.price,
                down_payment,
                fips,
                &record.state_code,
                record.yearly_property_tax.unwrap_or(0.0),
                record.hoa_fee,
            )
            .await?;
        let payment = pluck(
            &results,
            &["mortgage_data", "monthly_payment"],
            "realtor loan response",
        )?;
        payment.as_f64().ok_or_else(|| RealtyError::UnexpectedSchema {
            reason: "mortgage_data.monthly_payment is not a number".to_owned(),
        })
    }
}
