//! Bill data port
//!
//! Defines the interface for fetching bill detail from the legislative
//! data source. The adapter (Open Legislation API client) lives in the
//! infrastructure layer.

use async_trait::async_trait;
use statehouse_domain::{BillDetail, BillNumber};
use thiserror::Error;

/// Errors that can occur while looking up a bill.
#[derive(Error, Debug)]
pub enum BillLookupError {
    #[error("Bill not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("API error: {0}")]
    Api(String),
}

/// Gateway for bill detail lookups.
#[async_trait]
pub trait BillGateway: Send + Sync {
    /// Fetch detail for a bill in the configured session year.
    async fn fetch_bill(&self, bill: &BillNumber) -> Result<BillDetail, BillLookupError>;

    /// Whether a PDF rendition of the bill text exists.
    async fn pdf_available(&self, bill: &BillNumber) -> Result<bool, BillLookupError>;
}
