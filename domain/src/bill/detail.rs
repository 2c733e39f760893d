//! Bill detail entities returned by the legislative data source.

use crate::bill::number::BillNumber;
use serde::{Deserialize, Serialize};

/// A bill as presented to the user (Entity).
///
/// The infrastructure layer maps provider payloads into this shape; the
/// presentation layer formats it. Dates stay as the provider's ISO-8601
/// strings; nothing in the product does date arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillDetail {
    pub number: BillNumber,
    /// Legislative session year the bill belongs to, e.g. 2025.
    pub session_year: i32,
    pub title: String,
    /// Plain-text summary; may contain bill references worth auto-linking.
    pub summary: String,
    pub sponsor: Option<String>,
    pub status: Option<String>,
    pub actions: Vec<BillAction>,
    /// Whether a full-text PDF is known to be retrievable.
    pub pdf_available: Option<bool>,
}

impl BillDetail {
    pub fn new(number: BillNumber, session_year: i32, title: impl Into<String>) -> Self {
        Self {
            number,
            session_year,
            title: title.into(),
            summary: String::new(),
            sponsor: None,
            status: None,
            actions: Vec::new(),
            pdf_available: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_sponsor(mut self, sponsor: impl Into<String>) -> Self {
        self.sponsor = Some(sponsor.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// One entry in a bill's action timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillAction {
    /// ISO-8601 date string as provided by the source.
    pub date: String,
    pub text: String,
    pub chamber: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_optional_fields() {
        let number = BillNumber::parse("S1528").unwrap();
        let bill = BillDetail::new(number, 2025, "An act")
            .with_summary("Relates to S99 reporting")
            .with_sponsor("Doe")
            .with_status("In Committee");
        assert_eq!(bill.number.canonical(), "S01528");
        assert_eq!(bill.sponsor.as_deref(), Some("Doe"));
        assert_eq!(bill.status.as_deref(), Some("In Committee"));
        assert!(bill.actions.is_empty());
    }
}
