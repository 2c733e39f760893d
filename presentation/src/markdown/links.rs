//! Link classification for rendered markdown.
//!
//! Every link in a reply lands in one of three buckets: no usable href
//! renders as plain text, app-internal routes (including recognized
//! public bill pages rewritten to routes) render as internal links, and
//! everything else renders as an external link that opens in a new tab
//! in HTML output.

use pulldown_cmark::{Event, Parser, Tag};
use statehouse_domain::rewrite_external_url;

/// How a markdown link should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    /// No href: render the link text alone.
    PlainText,
    /// App-internal route path, e.g. `/bills/S01528`.
    Internal(String),
    /// External URL, passed through untouched.
    External(String),
}

/// Classify an href the way the renderers consume it.
///
/// Absent and empty hrefs are plain text. A leading `/` marks an internal
/// route. Recognized public bill-page URLs are rewritten to their internal
/// route; anything else stays external.
pub fn classify_link(href: Option<&str>) -> LinkDisposition {
    let href = match href {
        None => return LinkDisposition::PlainText,
        Some(h) if h.is_empty() => return LinkDisposition::PlainText,
        Some(h) => h,
    };

    if href.starts_with('/') {
        return LinkDisposition::Internal(href.to_string());
    }

    match rewrite_external_url(href) {
        Some(route) => LinkDisposition::Internal(route.path()),
        None => LinkDisposition::External(href.to_string()),
    }
}

/// Collect the bill numbers a reply links to, in order of first mention.
///
/// Scans the markdown for links into the `/bills/` route; the footer
/// hint under each reply is built from this.
pub fn referenced_bills(markdown: &str) -> Vec<String> {
    let mut bills = Vec::new();
    for event in Parser::new(markdown) {
        if let Event::Start(Tag::Link { dest_url, .. }) = event
            && let Some(number) = dest_url.strip_prefix("/bills/")
            && !number.is_empty()
            && !bills.iter().any(|b| b == number)
        {
            bills.push(number.to_string());
        }
    }
    bills
}
