//! Port for transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording completed chat
//! turns to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! conversation itself in a machine-readable format (JSONL).

use statehouse_domain::ChatTurn;

/// Port for appending chat turns to a transcript.
///
/// Implementations write each turn as a single record (e.g., one JSONL
/// line). The `log_turn` method is synchronous and non-fallible; logging
/// failures are silently ignored.
pub trait TranscriptLogger: Send + Sync {
    /// Record a completed exchange.
    fn log_turn(&self, turn: &ChatTurn);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log_turn(&self, _turn: &ChatTurn) {}
}
