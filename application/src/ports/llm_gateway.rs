//! LLM Gateway port
//!
//! Defines the interface for communicating with the assistant back end.

use async_trait::async_trait;
use statehouse_domain::StreamEvent;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Parameters for opening an assistant session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Model identifier sent to the back end.
    pub model: String,
    /// Optional system prompt inserted as the first message.
    pub system_prompt: Option<String>,
    /// Optional completion token cap.
    pub max_tokens: Option<u32>,
}

impl SessionOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Gateway for assistant communication
///
/// This port defines how the application layer talks to the assistant
/// back end. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a new conversation session.
    async fn open_session(
        &self,
        options: &SessionOptions,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// Handle for receiving streaming events from an assistant session.
///
/// Wraps an unbounded `mpsc` receiver and provides convenience methods
/// for consuming the stream. The channel is unbounded so the producer's
/// decode loop can forward deltas from a synchronous callback; volume is
/// bounded in practice by the model's completion cap. Dropping the
/// handle abandons the stream (the producer observes the closed
/// channel).
pub struct StreamHandle {
    pub receiver: mpsc::UnboundedReceiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::UnboundedReceiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream, invoking `on_delta(latest, accumulated)` for
    /// each text chunk, and return the full accumulated text.
    ///
    /// A `Completed` event carrying text while nothing has been
    /// accumulated (the non-streaming fallback) is delivered to the
    /// callback as one chunk.
    pub async fn collect_with<F>(mut self, mut on_delta: F) -> Result<String, GatewayError>
    where
        F: FnMut(&str, &str),
    {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    full_text.push_str(&chunk);
                    on_delta(&chunk, &full_text);
                }
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() && !text.is_empty() {
                        on_delta(&text, &text);
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        // Channel closed without Completed; return what we have
        Ok(full_text)
    }

    /// Consume the stream and collect all text into a single string.
    ///
    /// Useful when you want streaming at the transport level but only need
    /// the final text (e.g., for the default `send_streaming` fallback).
    pub async fn collect_text(self) -> Result<String, GatewayError> {
        self.collect_with(|_, _| {}).await
    }
}

/// An active assistant session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// The model this session talks to.
    fn model(&self) -> &str;

    /// Send a message and get the complete response.
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Send a message and get a streaming response.
    ///
    /// Default implementation calls `send()` and wraps the result in a
    /// single `Completed` event, so non-streaming implementations work
    /// without changes.
    async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError> {
        let result = self.send(content).await?;
        let (tx, rx) = mpsc::unbounded_channel();
        // If the receiver is dropped, that's fine
        let _ = tx.send(StreamEvent::Completed(result));
        Ok(StreamHandle::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle_of(events: Vec<StreamEvent>) -> StreamHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        for event in events {
            tx.send(event).unwrap();
        }
        drop(tx);
        StreamHandle::new(rx)
    }

    #[tokio::test]
    async fn collect_with_accumulates_and_reports() {
        let handle = handle_of(vec![
            StreamEvent::Delta("Hel".to_string()),
            StreamEvent::Delta("lo".to_string()),
            StreamEvent::Completed("Hello".to_string()),
        ]);

        let mut seen = Vec::new();
        let full = handle
            .collect_with(|delta, total| seen.push((delta.to_string(), total.to_string())))
            .await
            .unwrap();

        assert_eq!(full, "Hello");
        assert_eq!(
            seen,
            vec![
                ("Hel".to_string(), "Hel".to_string()),
                ("lo".to_string(), "Hello".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn collect_with_treats_bare_completed_as_one_chunk() {
        let handle = handle_of(vec![StreamEvent::Completed("whole reply".to_string())]);

        let mut seen = Vec::new();
        let full = handle
            .collect_with(|delta, total| seen.push((delta.to_string(), total.to_string())))
            .await
            .unwrap();

        assert_eq!(full, "whole reply");
        assert_eq!(
            seen,
            vec![("whole reply".to_string(), "whole reply".to_string())]
        );
    }

    #[tokio::test]
    async fn collect_text_surfaces_stream_errors() {
        let handle = handle_of(vec![
            StreamEvent::Delta("partial".to_string()),
            StreamEvent::Error("connection reset".to_string()),
        ]);

        let err = handle.collect_text().await.unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn collect_text_returns_partial_on_silent_close() {
        let handle = handle_of(vec![StreamEvent::Delta("partial".to_string())]);
        assert_eq!(handle.collect_text().await.unwrap(), "partial");
    }
}
