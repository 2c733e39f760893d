//! View Bill use case.
//!
//! Fetches bill detail from the legislative data source, links bill
//! references mentioned in the summary, and settles PDF availability so
//! the presentation layer can render a complete card.

use crate::ports::bill_gateway::{BillGateway, BillLookupError};
use statehouse_domain::{BillDetail, BillNumber, autolink_bill_references};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A bill ready for rendering.
#[derive(Debug, Clone)]
pub struct BillView {
    pub detail: BillDetail,
    /// Summary with bare bill references turned into internal links.
    pub linked_summary: String,
}

/// Use case for looking up a single bill.
pub struct ViewBillUseCase {
    bills: Arc<dyn BillGateway>,
}

impl ViewBillUseCase {
    pub fn new(bills: Arc<dyn BillGateway>) -> Self {
        Self { bills }
    }

    pub async fn execute(&self, bill: &BillNumber) -> Result<BillView, BillLookupError> {
        info!("Looking up bill {}", bill.canonical());

        let mut detail = self.bills.fetch_bill(bill).await?;

        if detail.pdf_available.is_none() {
            // Availability is cosmetic; a failed check must not sink the lookup
            match self.bills.pdf_available(bill).await {
                Ok(available) => detail.pdf_available = Some(available),
                Err(e) => warn!("PDF availability check failed: {}", e),
            }
        }

        let linked_summary = autolink_bill_references(&detail.summary);
        debug!(
            actions = detail.actions.len(),
            pdf = ?detail.pdf_available,
            "Bill lookup completed"
        );

        Ok(BillView {
            detail,
            linked_summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct MockBillGateway {
        detail: BillDetail,
        pdf: Result<bool, ()>,
    }

    #[async_trait]
    impl BillGateway for MockBillGateway {
        async fn fetch_bill(&self, _bill: &BillNumber) -> Result<BillDetail, BillLookupError> {
            Ok(self.detail.clone())
        }

        async fn pdf_available(&self, _bill: &BillNumber) -> Result<bool, BillLookupError> {
            self.pdf
                .map_err(|_| BillLookupError::Api("head failed".to_string()))
        }
    }

    fn sample_detail() -> BillDetail {
        let number = BillNumber::parse("S1528").unwrap();
        BillDetail::new(number, 2025, "An act to amend the public health law")
            .with_summary("Companion to A405; see also S99.")
    }

    #[tokio::test]
    async fn links_summary_and_fills_pdf_flag() {
        let gateway = Arc::new(MockBillGateway {
            detail: sample_detail(),
            pdf: Ok(true),
        });
        let use_case = ViewBillUseCase::new(gateway);

        let bill = BillNumber::parse("S1528").unwrap();
        let view = use_case.execute(&bill).await.unwrap();

        assert_eq!(view.detail.pdf_available, Some(true));
        assert!(view.linked_summary.contains("[A00405](/bills/A00405)"));
        // S99 is too short to link (needs 3+ digits)
        assert!(!view.linked_summary.contains("S00099"));
    }

    #[tokio::test]
    async fn pdf_check_failure_does_not_sink_lookup() {
        let gateway = Arc::new(MockBillGateway {
            detail: sample_detail(),
            pdf: Err(()),
        });
        let use_case = ViewBillUseCase::new(gateway);

        let bill = BillNumber::parse("S1528").unwrap();
        let view = use_case.execute(&bill).await.unwrap();
        assert_eq!(view.detail.pdf_available, None);
    }
}
