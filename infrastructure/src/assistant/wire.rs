//! Chat-completions request types.
//!
//! The response side has no DTOs: streaming payloads go through the
//! shape matchers in [`crate::sse::delta`], and complete bodies through
//! [`extract_complete`](crate::sse::delta::extract_complete), both of
//! which work on loosely-typed JSON by design.

use serde::Serialize;
use statehouse_domain::ChatMessage;

/// Request body for the chat-completions endpoint.
///
/// [`ChatMessage`] already serializes to the wire shape
/// (`{"role":"user","content":"…"}`), so the history is borrowed as-is.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub stream: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_shape() {
        let messages = vec![
            ChatMessage::system("be helpful"),
            ChatMessage::user("hello"),
        ];
        let request = ChatRequest {
            model: "m1",
            messages: &messages,
            max_tokens: Some(1024),
            stream: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "m1",
                "messages": [
                    {"role": "system", "content": "be helpful"},
                    {"role": "user", "content": "hello"},
                ],
                "max_tokens": 1024,
                "stream": true,
            })
        );
    }

    #[test]
    fn omits_absent_max_tokens() {
        let messages = vec![ChatMessage::user("hi")];
        let request = ChatRequest {
            model: "m1",
            messages: &messages,
            max_tokens: None,
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("max_tokens").is_none());
    }
}
