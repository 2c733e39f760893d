//! Streaming events for assistant session communication.
//!
//! [`StreamEvent`] represents individual events in a streaming assistant
//! response, enabling real-time display of model output as it is
//! generated.

/// An event in a streaming assistant response.
///
/// Bridges infrastructure-level streaming (SSE chunks from the gateway)
/// to the application layer, enabling real-time progress display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model (one extracted content delta).
    Delta(String),
    /// The complete accumulated response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming.
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta or Completed event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) | StreamEvent::Completed(s) => Some(s),
            StreamEvent::Error(_) => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}
