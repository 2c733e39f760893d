//! Server-sent events plumbing.
//!
//! - [`decoder::SseLineDecoder`]: bytes to complete lines, with carry
//! - [`delta`]: payload shape matchers and content extraction
//! - [`reader::read_sse_stream`]: the consumption loop

pub mod decoder;
pub mod delta;
pub mod reader;

pub use decoder::{SseFrame, SseLineDecoder};
pub use delta::{ContentDelta, DeltaShape, extract_complete, extract_delta};
pub use reader::read_sse_stream;
