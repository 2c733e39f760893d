//! Transcript persistence adapters.

pub mod jsonl;

pub use jsonl::JsonlTranscriptLogger;
