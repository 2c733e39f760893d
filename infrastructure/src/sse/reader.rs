//! The SSE consumption loop.
//!
//! [`read_sse_stream`] is the single suspension point of a streaming
//! exchange: it awaits byte chunks, feeds them through the
//! [`SseLineDecoder`], extracts content deltas, and grows the
//! accumulator. Extraction and callback invocation are synchronous;
//! chunks and lines are processed strictly in arrival order.

use crate::sse::decoder::{SseFrame, SseLineDecoder};
use crate::sse::delta::{ContentDelta, extract_delta};
use futures::{Stream, StreamExt};
use serde_json::Value;
use statehouse_domain::util::preview;
use tracing::{debug, trace};

/// Consume an SSE byte stream to completion.
///
/// `on_delta` fires synchronously for every extracted content fragment
/// with `(latest, accumulated_so_far)`. The return value is the full
/// accumulated text once the stream is exhausted.
///
/// Malformed `data:` payloads are skipped (logged at debug); the
/// `[DONE]` sentinel is ignored; transport errors propagate unchanged.
pub async fn read_sse_stream<S, B, E, F>(stream: S, mut on_delta: F) -> Result<String, E>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    F: FnMut(&str, &str),
{
    let mut decoder = SseLineDecoder::new();
    let mut accumulated = String::new();
    let mut stream = std::pin::pin!(stream);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        for line in decoder.feed(chunk.as_ref()) {
            process_line(&line, &mut accumulated, &mut on_delta);
        }
    }
    if let Some(line) = decoder.finish() {
        process_line(&line, &mut accumulated, &mut on_delta);
    }

    Ok(accumulated)
}

fn process_line<F>(line: &str, accumulated: &mut String, on_delta: &mut F)
where
    F: FnMut(&str, &str),
{
    match SseFrame::parse(line) {
        SseFrame::Data(payload) => match serde_json::from_str::<Value>(payload) {
            Ok(value) => {
                if let Some(ContentDelta { text, shape }) = extract_delta(&value) {
                    trace!(?shape, bytes = text.len(), "content delta");
                    accumulated.push_str(&text);
                    on_delta(&text, accumulated);
                }
            }
            Err(e) => {
                debug!("Skipping malformed SSE payload ({}): {}", e, preview(payload, 120));
            }
        },
        SseFrame::Done => trace!("Received [DONE] marker"),
        SseFrame::Other => {}
    }
}
