//! Conversation entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a conversation (Entity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One completed exchange: a user prompt and the assistant's full reply.
///
/// Transcript logging appends one of these per exchange. The reply holds
/// the accumulated text after stream end, with bill references already
/// linked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub asked_at: DateTime<Utc>,
    pub model: String,
    pub prompt: String,
    pub reply: String,
}

impl ChatTurn {
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            asked_at: Utc::now(),
            model: model.into(),
            prompt: prompt.into(),
            reply: reply.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_roles() {
        assert_eq!(ChatMessage::system("s").role, Role::System);
        assert_eq!(ChatMessage::user("u").role, Role::User);
        assert_eq!(ChatMessage::assistant("a").role, Role::Assistant);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
