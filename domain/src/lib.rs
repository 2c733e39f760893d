//! Domain layer for statehouse
//!
//! This crate contains the core business logic and value objects: the
//! bill-number grammar, reference auto-linking, internal routes, external
//! URL rewriting, and conversation entities. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Bill references
//!
//! NY State bills are identified by print numbers like `S1528` or `A405B`.
//! The canonical (route) form zero-pads the digit run to five places:
//! `S01528`. [`autolink_bill_references`] finds bare references in
//! assistant markdown and links them to the internal bill route.
//!
//! ## Streaming
//!
//! Assistant replies arrive as a stream of content deltas. The domain
//! models these as [`StreamEvent`]s; decoding the wire format is an
//! infrastructure concern.

pub mod bill;
pub mod rewrite;
pub mod route;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use bill::{
    autolink::autolink_bill_references,
    detail::{BillAction, BillDetail},
    number::{BILL_PREFIXES, BillNumber, ParseBillNumberError, is_bill_prefix, normalize},
};
pub use rewrite::rewrite_external_url;
pub use route::AppRoute;
pub use session::{
    message::{ChatMessage, ChatTurn, Role},
    stream::StreamEvent,
};
