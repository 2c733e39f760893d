//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for statehouse.

mod repl;

pub use repl::ChatRepl;
