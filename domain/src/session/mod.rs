//! Conversation domain.
//!
//! - [`message::ChatMessage`]: a single message within a conversation
//! - [`message::ChatTurn`]: a completed prompt/reply exchange
//! - [`stream::StreamEvent`]: incremental events from a streaming reply

pub mod message;
pub mod stream;
