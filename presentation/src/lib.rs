//! Presentation layer for statehouse
//!
//! This crate contains CLI definitions, markdown rendering for terminal
//! and HTML transcript export, the bill card formatter, streaming
//! progress output, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod markdown;
pub mod output;
pub mod progress;
pub mod scramble;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::Cli;
pub use markdown::{
    LinkDisposition, TerminalRenderer, classify_link, markdown_to_html, referenced_bills,
    render_transcript,
};
pub use output::BillCard;
pub use progress::StreamPrinter;
pub use scramble::Scramble;
