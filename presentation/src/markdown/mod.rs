//! Markdown rendering
//!
//! One link dispatch, two renderers: terminal output and HTML transcript
//! export share [`classify_link`] so a reply links the same way in both.

mod html;
mod links;
mod terminal;

pub use html::{markdown_to_html, render_transcript};
pub use links::{LinkDisposition, classify_link, referenced_bills};
pub use terminal::TerminalRenderer;
