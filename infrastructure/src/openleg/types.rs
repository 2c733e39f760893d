//! Open Legislation API response types.
//!
//! Deserialized leniently: the API omits fields freely depending on the
//! bill's state, so everything optional defaults instead of failing the
//! whole lookup.

use crate::openleg::html::html_to_text;
use serde::Deserialize;
use statehouse_domain::{BillAction, BillDetail, BillNumber};

/// Top-level envelope around every Open Legislation response.
#[derive(Debug, Deserialize)]
pub struct BillEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub result: Option<BillResponse>,
}

/// The bill payload inside the envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    #[serde(default)]
    pub print_no: String,
    #[serde(default)]
    pub session: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Sponsor memo; served with HTML markup.
    #[serde(default)]
    pub memo: String,
    pub sponsor: Option<SponsorInfo>,
    pub status: Option<StatusInfo>,
    #[serde(default)]
    pub actions: ActionList,
}

#[derive(Debug, Deserialize)]
pub struct SponsorInfo {
    pub member: Option<MemberInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub status_desc: Option<String>,
    pub action_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActionList {
    #[serde(default)]
    pub items: Vec<ActionInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ActionInfo {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub text: String,
    pub chamber: Option<String>,
}

impl BillResponse {
    /// Map the API payload into the domain entity.
    ///
    /// `requested` is used when the payload's own print number does not
    /// parse. An empty summary falls back to the memo, stripped of its
    /// markup.
    pub fn into_detail(self, requested: &BillNumber) -> BillDetail {
        let number = BillNumber::parse(&self.print_no).unwrap_or_else(|_| requested.clone());

        let summary = if self.summary.trim().is_empty() {
            html_to_text(&self.memo)
        } else {
            self.summary
        };

        let mut detail = BillDetail::new(number, self.session, self.title).with_summary(summary);
        if let Some(name) = self
            .sponsor
            .and_then(|s| s.member)
            .map(|m| m.full_name)
            .filter(|n| !n.is_empty())
        {
            detail = detail.with_sponsor(name);
        }
        if let Some(desc) = self.status.and_then(|s| s.status_desc) {
            detail = detail.with_status(desc);
        }
        detail.actions = self
            .actions
            .items
            .into_iter()
            .map(|a| BillAction {
                date: a.date,
                text: a.text,
                chamber: a.chamber,
            })
            .collect();
        detail
    }
}
