//! Progress notification port
//!
//! Defines the interface for reporting streaming progress to the
//! presentation layer.

/// Callbacks fired while an assistant reply streams in.
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console printer, spinner, etc.). Methods
/// are synchronous; they run inside the stream consumption loop and
/// must not block.
pub trait StreamProgress: Send + Sync {
    /// Called once, after the session is open and before the first delta.
    fn on_stream_start(&self) {}

    /// Called for each text chunk, with the chunk and the accumulated
    /// text so far.
    fn on_delta(&self, chunk: &str, accumulated: &str);

    /// Called once after the stream ends, before post-processing.
    fn on_stream_end(&self) {}
}

/// No-op progress for tests and non-interactive callers.
pub struct SilentProgress;

impl StreamProgress for SilentProgress {
    fn on_delta(&self, _chunk: &str, _accumulated: &str) {}
}
