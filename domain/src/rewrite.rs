//! External URL rewriting.
//!
//! Links in assistant output that point at the public NY Senate site's
//! bill pages are rewritten to the internal bill route so navigation
//! stays inside the application. Everything else is left for external
//! link handling.

use crate::bill::number::BillNumber;
use crate::route::AppRoute;
use url::Url;

/// Host fragment identifying the public legislative-tracking site.
const KNOWN_HOST: &str = "nysenate.gov";

/// Path fragment identifying a bill detail page on that site.
const BILL_PATH_SEGMENT: &str = "/legislation/bills/";

/// Base used to resolve scheme-less or relative hrefs so parsing never
/// throws. Anything that actually resolves against it keeps the
/// placeholder host and fails the host check.
const PLACEHOLDER_BASE: &str = "https://link.invalid/";

/// Rewrite an external bill-page URL to the internal route.
///
/// Returns `Some(route)` only when the href's host contains the known
/// legislative site, its path contains the bill-detail segment, and the
/// trailing path segment is a bill number (matched case-insensitively).
/// Every other input, including unparseable hrefs, yields `None`,
/// meaning "render as a normal external link". Never panics.
pub fn rewrite_external_url(href: &str) -> Option<AppRoute> {
    let base = Url::parse(PLACEHOLDER_BASE).ok()?;
    let url = Url::options().base_url(Some(&base)).parse(href).ok()?;

    let host = url.host_str()?;
    if !host.contains(KNOWN_HOST) {
        return None;
    }
    if !url.path().contains(BILL_PATH_SEGMENT) {
        return None;
    }

    let tail = url.path_segments()?.filter(|s| !s.is_empty()).next_back()?;
    let bill = BillNumber::parse(tail).ok()?;
    Some(AppRoute::BillDetail(bill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_known_bill_page() {
        let route =
            rewrite_external_url("https://www.nysenate.gov/legislation/bills/2025/S1234").unwrap();
        assert_eq!(route.path(), "/bills/S01234");
    }

    #[test]
    fn rewrites_lowercase_print_number() {
        let route =
            rewrite_external_url("https://nysenate.gov/legislation/bills/2025/s1234a").unwrap();
        assert_eq!(route.path(), "/bills/S01234A");
    }

    #[test]
    fn tolerates_trailing_slash() {
        let route =
            rewrite_external_url("https://www.nysenate.gov/legislation/bills/2025/S1234/").unwrap();
        assert_eq!(route.path(), "/bills/S01234");
    }

    #[test]
    fn foreign_host_is_not_rewritten() {
        assert!(rewrite_external_url("https://example.com/legislation/bills/2025/S1234").is_none());
    }

    #[test]
    fn other_site_paths_are_not_rewritten() {
        assert!(rewrite_external_url("https://www.nysenate.gov/senators/jane-doe").is_none());
        assert!(rewrite_external_url("https://www.nysenate.gov/legislation/laws/ABP").is_none());
    }

    #[test]
    fn non_bill_tail_is_not_rewritten() {
        assert!(
            rewrite_external_url("https://www.nysenate.gov/legislation/bills/2025/search").is_none()
        );
    }

    #[test]
    fn garbage_and_relative_inputs_yield_none() {
        assert!(rewrite_external_url("not a url at all").is_none());
        assert!(rewrite_external_url("/bills/S1234").is_none());
        assert!(rewrite_external_url("").is_none());
        assert!(rewrite_external_url("mailto:clerk@example.com").is_none());
    }
}
