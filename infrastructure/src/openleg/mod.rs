//! Open Legislation API adapter
//!
//! Implements the `BillGateway` port against the NY Senate Open
//! Legislation service: JSON bill detail, a HEAD probe for the public
//! PDF rendition, and markup stripping for sponsor memos.

pub mod client;
pub mod html;
pub mod types;

pub use client::OpenLegClient;
pub use html::html_to_text;
