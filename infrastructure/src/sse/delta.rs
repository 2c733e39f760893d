//! Content extraction from provider JSON payloads.
//!
//! Streaming providers disagree on where the incremental text lives.
//! Rather than chaining optional lookups inline, each known payload
//! shape is a [`DeltaShape`] variant with its own matcher, tried in a
//! fixed priority order. Adding a provider means adding a variant, not
//! touching the decode loop.

use serde_json::Value;

/// A recognized streaming payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaShape {
    /// Chat-completions style: `{"choices":[{"delta":{"content":"…"}}]}`.
    ChoicesDelta,
    /// Bare-delta style: `{"delta":{"text":"…"}}`.
    DeltaText,
}

impl DeltaShape {
    /// All shapes in match priority order.
    pub const ALL: [DeltaShape; 2] = [DeltaShape::ChoicesDelta, DeltaShape::DeltaText];

    /// Extract this shape's text from a parsed payload.
    fn extract<'v>(&self, value: &'v Value) -> Option<&'v str> {
        match self {
            DeltaShape::ChoicesDelta => value
                .get("choices")?
                .get(0)?
                .get("delta")?
                .get("content")?
                .as_str(),
            DeltaShape::DeltaText => value.get("delta")?.get("text")?.as_str(),
        }
    }
}

/// One extracted content fragment and the shape that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDelta {
    pub text: String,
    pub shape: DeltaShape,
}

/// Try each known shape in order, returning the first that matches.
///
/// Returns `None` for payloads carrying no text: role preludes, finish
/// chunks, usage reports, and empty-string deltas all fall through.
pub fn extract_delta(value: &Value) -> Option<ContentDelta> {
    DeltaShape::ALL.iter().find_map(|shape| {
        shape
            .extract(value)
            .filter(|text| !text.is_empty())
            .map(|text| ContentDelta {
                text: text.to_string(),
                shape: *shape,
            })
    })
}

/// Extract the reply text from a complete (non-streaming) response body.
///
/// Priority order: a non-empty top-level `generatedText`, then a
/// non-empty `choices[0].message.content`, then the empty string. Total
/// by design: an unrecognized body degrades to `""`, never an error.
pub fn extract_complete(value: &Value) -> String {
    if let Some(text) = value.get("generatedText").and_then(Value::as_str)
        && !text.is_empty()
    {
        return text.to_string();
    }
    if let Some(text) = value
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
    {
        return text.to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn choices_delta_shape_matches() {
        let value = json!({"choices":[{"delta":{"content":"Hel"}}]});
        let delta = extract_delta(&value).unwrap();
        assert_eq!(delta.text, "Hel");
        assert_eq!(delta.shape, DeltaShape::ChoicesDelta);
    }

    #[test]
    fn delta_text_shape_matches() {
        let value = json!({"delta":{"text":"lo"}});
        let delta = extract_delta(&value).unwrap();
        assert_eq!(delta.text, "lo");
        assert_eq!(delta.shape, DeltaShape::DeltaText);
    }

    #[test]
    fn choices_shape_wins_when_both_present() {
        let value = json!({
            "choices":[{"delta":{"content":"a"}}],
            "delta":{"text":"b"}
        });
        assert_eq!(extract_delta(&value).unwrap().text, "a");
    }

    #[test]
    fn role_prelude_and_finish_chunks_carry_no_text() {
        assert!(extract_delta(&json!({"choices":[{"delta":{"role":"assistant"}}]})).is_none());
        assert!(extract_delta(&json!({"choices":[{"delta":{},"finish_reason":"stop"}]})).is_none());
        assert!(extract_delta(&json!({"usage":{"total_tokens":12}})).is_none());
    }

    #[test]
    fn empty_delta_text_is_skipped() {
        assert!(extract_delta(&json!({"choices":[{"delta":{"content":""}}]})).is_none());
        assert!(extract_delta(&json!({"delta":{"text":""}})).is_none());
    }

    #[test]
    fn non_string_content_is_skipped() {
        assert!(extract_delta(&json!({"choices":[{"delta":{"content":null}}]})).is_none());
        assert!(extract_delta(&json!({"delta":{"text":42}})).is_none());
    }

    #[test]
    fn complete_prefers_generated_text() {
        let value = json!({
            "generatedText": "whole",
            "choices":[{"message":{"content":"other"}}]
        });
        assert_eq!(extract_complete(&value), "whole");
    }

    #[test]
    fn complete_falls_back_to_choices_message() {
        let value = json!({"choices":[{"message":{"content":"fallback"}}]});
        assert_eq!(extract_complete(&value), "fallback");
    }

    #[test]
    fn complete_empty_generated_text_falls_through() {
        let value = json!({
            "generatedText": "",
            "choices":[{"message":{"content":"fallback"}}]
        });
        assert_eq!(extract_complete(&value), "fallback");
    }

    #[test]
    fn complete_degrades_to_empty_string() {
        assert_eq!(extract_complete(&json!({})), "");
        assert_eq!(extract_complete(&json!({"choices":[]})), "");
        assert_eq!(extract_complete(&json!({"choices":[{"message":{}}]})), "");
        assert_eq!(extract_complete(&json!({"generatedText": 7})), "");
    }
}
