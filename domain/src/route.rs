//! Typed internal routes.
//!
//! The assistant's linked output and the URL rewriter both target
//! app-internal paths. [`AppRoute`] makes those paths typed at the seams
//! instead of passing raw strings around.

use crate::bill::number::BillNumber;
use std::fmt;

/// Path prefix for bill detail routes.
pub const BILLS_PREFIX: &str = "/bills/";

/// An internal navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// Bill detail view, `/bills/{canonical}`.
    BillDetail(BillNumber),
}

impl AppRoute {
    /// Parse an internal path. Accepts non-canonical bill spellings in
    /// the path (`/bills/s256`) and canonicalizes them.
    pub fn parse(path: &str) -> Option<AppRoute> {
        let rest = path.strip_prefix(BILLS_PREFIX)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() || rest.contains('/') {
            return None;
        }
        BillNumber::parse(rest).ok().map(AppRoute::BillDetail)
    }

    /// The path string for this route.
    pub fn path(&self) -> String {
        match self {
            AppRoute::BillDetail(bill) => format!("{}{}", BILLS_PREFIX, bill.canonical()),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_round_trip() {
        let route = AppRoute::parse("/bills/S01528").unwrap();
        assert_eq!(route.path(), "/bills/S01528");
    }

    #[test]
    fn parse_canonicalizes_loose_spellings() {
        assert_eq!(
            AppRoute::parse("/bills/s256").unwrap().path(),
            "/bills/S00256"
        );
        assert_eq!(
            AppRoute::parse("/bills/S256A/").unwrap().path(),
            "/bills/S00256A"
        );
    }

    #[test]
    fn parse_rejects_foreign_paths() {
        assert!(AppRoute::parse("/members/42").is_none());
        assert!(AppRoute::parse("/bills/").is_none());
        assert!(AppRoute::parse("/bills/S256/extra").is_none());
        assert!(AppRoute::parse("bills/S256").is_none());
    }
}
