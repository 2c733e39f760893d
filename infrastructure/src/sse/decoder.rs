//! Byte-level SSE decoding.
//!
//! [`SseLineDecoder`] turns arbitrarily-chunked response bytes into
//! complete lines. Chunk boundaries are not aligned to anything: a
//! multi-byte UTF-8 character or a logical line may be split across two
//! chunks, so the decoder carries both an incomplete byte sequence and an
//! incomplete line between calls to [`feed`](SseLineDecoder::feed).
//!
//! [`SseFrame`] classifies a completed line against the `data:` framing
//! used by the chat-completions wire format.

/// Field prefix for payload-carrying SSE lines.
const DATA_PREFIX: &str = "data:";

/// Logical end-of-stream sentinel sent as a `data:` payload.
const DONE_SENTINEL: &str = "[DONE]";

/// One classified SSE line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseFrame<'a> {
    /// A `data:` line carrying a payload (normally JSON).
    Data(&'a str),
    /// The `data: [DONE]` terminator. Not an error; the transport end of
    /// stream is the authoritative terminator.
    Done,
    /// Anything else: blank lines, comments, `event:`/`id:` fields.
    Other,
}

impl<'a> SseFrame<'a> {
    /// Classify a complete line.
    ///
    /// Accepts `data:` with or without the single optional space after
    /// the colon, per the SSE field syntax.
    pub fn parse(line: &'a str) -> SseFrame<'a> {
        let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
            return SseFrame::Other;
        };
        let payload = rest.strip_prefix(' ').unwrap_or(rest);
        if payload.trim() == DONE_SENTINEL {
            return SseFrame::Done;
        }
        SseFrame::Data(payload)
    }
}

/// Incremental decoder from byte chunks to complete lines.
#[derive(Debug, Default)]
pub struct SseLineDecoder {
    /// Bytes of an incomplete trailing UTF-8 sequence from the previous
    /// chunk.
    utf8_carry: Vec<u8>,
    /// Text of a line whose terminator has not arrived yet.
    line_carry: String,
}

impl SseLineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of bytes, returning every line completed by it.
    ///
    /// Line terminators (`\n`, with an optional preceding `\r`) are
    /// stripped. An unterminated tail is carried into the next call.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut text = std::mem::take(&mut self.line_carry);
        if self.utf8_carry.is_empty() {
            decode_utf8(chunk, &mut text, &mut self.utf8_carry);
        } else {
            let mut joined = std::mem::take(&mut self.utf8_carry);
            joined.extend_from_slice(chunk);
            decode_utf8(&joined, &mut text, &mut self.utf8_carry);
        }

        let mut lines = Vec::new();
        while let Some(pos) = text.find('\n') {
            let mut line: String = text.drain(..=pos).collect();
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
            lines.push(line);
        }
        self.line_carry = text;
        lines
    }

    /// Finish the stream, yielding the carried unterminated line if any.
    ///
    /// The wire format terminates every event line, but a truncated
    /// stream may end mid-line; the carried text is still returned so a
    /// complete payload whose final newline never arrived is not lost.
    /// Bytes of a torn multi-byte character at end of stream are dropped.
    pub fn finish(mut self) -> Option<String> {
        if self.line_carry.is_empty() {
            None
        } else {
            let mut line = std::mem::take(&mut self.line_carry);
            if line.ends_with('\r') {
                line.pop();
            }
            Some(line)
        }
    }
}

/// Append the longest valid prefix of `bytes` to `out`.
///
/// An incomplete trailing sequence is stored in `carry` for the next
/// chunk; an invalid sequence mid-chunk becomes one replacement character
/// and decoding continues after it.
fn decode_utf8(mut bytes: &[u8], out: &mut String, carry: &mut Vec<u8>) {
    loop {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                out.push_str(s);
                return;
            }
            Err(e) => {
                let (valid, after_valid) = bytes.split_at(e.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    out.push_str(s);
                }
                match e.error_len() {
                    Some(invalid_len) => {
                        out.push(char::REPLACEMENT_CHARACTER);
                        bytes = &after_valid[invalid_len..];
                    }
                    None => {
                        *carry = after_valid.to_vec();
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_lines_in_one_chunk() {
        let mut decoder = SseLineDecoder::new();
        let lines = decoder.feed(b"data: one\ndata: two\n");
        assert_eq!(lines, vec!["data: one", "data: two"]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn line_split_across_chunks_is_reassembled() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data: {\"delta\":{\"te").is_empty());
        let lines = decoder.feed(b"xt\":\"hi\"}}\n");
        assert_eq!(lines, vec![r#"data: {"delta":{"text":"hi"}}"#]);
    }

    #[test]
    fn multibyte_char_split_across_chunks() {
        // 'の' is 0xe3 0x81 0xae
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(&[b'a', 0xe3, 0x81]).is_empty());
        let lines = decoder.feed(&[0xae, b'\n']);
        assert_eq!(lines, vec!["aの"]);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let mut decoder = SseLineDecoder::new();
        let lines = decoder.feed(b"data: one\r\ndata: two\r\n");
        assert_eq!(lines, vec!["data: one", "data: two"]);
    }

    #[test]
    fn finish_returns_unterminated_tail() {
        let mut decoder = SseLineDecoder::new();
        assert!(decoder.feed(b"data: last payload").is_empty());
        assert_eq!(decoder.finish(), Some("data: last payload".to_string()));
    }

    #[test]
    fn invalid_byte_becomes_replacement_char() {
        let mut decoder = SseLineDecoder::new();
        let lines = decoder.feed(&[b'a', 0xff, b'b', b'\n']);
        assert_eq!(lines, vec!["a\u{fffd}b"]);
    }

    #[test]
    fn frame_parse_recognizes_data_and_done() {
        assert_eq!(SseFrame::parse("data: {\"x\":1}"), SseFrame::Data("{\"x\":1}"));
        assert_eq!(SseFrame::parse("data:{\"x\":1}"), SseFrame::Data("{\"x\":1}"));
        assert_eq!(SseFrame::parse("data: [DONE]"), SseFrame::Done);
        assert_eq!(SseFrame::parse(""), SseFrame::Other);
        assert_eq!(SseFrame::parse(": keep-alive"), SseFrame::Other);
        assert_eq!(SseFrame::parse("event: message"), SseFrame::Other);
    }
}
