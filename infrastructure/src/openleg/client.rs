//! Open Legislation API client
//!
//! Talks to the NY Senate Open Legislation service. Bills are addressed
//! by session year and print number; the session year is fixed at
//! construction from configuration.

use crate::openleg::types::BillEnvelope;
use async_trait::async_trait;
use reqwest::StatusCode;
use statehouse_application::{BillGateway, BillLookupError};
use statehouse_domain::{BillDetail, BillNumber};
use std::time::Duration;
use tracing::{debug, info};

const BILLS_API_PATH: &str = "/api/3/bills";
const PDF_PATH: &str = "/pdf/bills";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Open Legislation bill API.
pub struct OpenLegClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    session_year: i32,
}

impl OpenLegClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        session_year: i32,
    ) -> Result<Self, BillLookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BillLookupError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            session_year,
        })
    }

    pub fn session_year(&self) -> i32 {
        self.session_year
    }

    fn bill_url(&self, bill: &BillNumber) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            BILLS_API_PATH,
            self.session_year,
            bill.print_no()
        )
    }

    fn pdf_url(&self, bill: &BillNumber) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            PDF_PATH,
            self.session_year,
            bill.print_no()
        )
    }
}

#[async_trait]
impl BillGateway for OpenLegClient {
    async fn fetch_bill(&self, bill: &BillNumber) -> Result<BillDetail, BillLookupError> {
        let url = self.bill_url(bill);
        info!(bill = %bill.canonical(), url = %url, "Fetching bill detail");

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| BillLookupError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BillLookupError::NotFound(bill.canonical()));
        }
        if !status.is_success() {
            return Err(BillLookupError::Api(format!("HTTP {}", status.as_u16())));
        }

        let envelope: BillEnvelope = response
            .json()
            .await
            .map_err(|e| BillLookupError::MalformedResponse(e.to_string()))?;
        if !envelope.success {
            return Err(BillLookupError::Api(envelope.message));
        }
        let payload = envelope
            .result
            .ok_or_else(|| BillLookupError::MalformedResponse("missing result".to_string()))?;

        Ok(payload.into_detail(bill))
    }

    async fn pdf_available(&self, bill: &BillNumber) -> Result<bool, BillLookupError> {
        let url = self.pdf_url(bill);
        debug!(bill = %bill.canonical(), url = %url, "Checking PDF availability");

        let response = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(|e| BillLookupError::ConnectionError(e.to_string()))?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenLegClient {
        OpenLegClient::new("https://legislation.nysenate.gov/", Some("k".to_string()), 2025)
            .unwrap()
    }

    #[test]
    fn bill_url_uses_session_year_and_print_no() {
        let bill = BillNumber::parse("s1528a").unwrap();
        assert_eq!(
            client().bill_url(&bill),
            "https://legislation.nysenate.gov/api/3/bills/2025/S1528A"
        );
    }

    #[test]
    fn pdf_url_mirrors_public_site_layout() {
        let bill = BillNumber::parse("A405").unwrap();
        assert_eq!(
            client().pdf_url(&bill),
            "https://legislation.nysenate.gov/pdf/bills/2025/A405"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_trimmed() {
        let bill = BillNumber::parse("S1").unwrap();
        assert!(!client().bill_url(&bill).contains("gov//"));
    }
}
