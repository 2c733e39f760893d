//! HTTP assistant session.
//!
//! [`HttpSession`] implements [`LlmSession`] over an OpenAI-style
//! chat-completions endpoint. Each session owns its conversation
//! history; `send` uses the non-streaming path, `send_streaming` spawns
//! a reader task that drives the SSE decode loop and forwards events
//! over an mpsc channel.

use crate::assistant::wire::ChatRequest;
use crate::sse::{extract_complete, read_sse_stream};
use async_trait::async_trait;
use serde_json::Value;
use statehouse_application::ports::llm_gateway::{GatewayError, LlmSession, StreamHandle};
use statehouse_domain::util::preview;
use statehouse_domain::{ChatMessage, StreamEvent};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Cap on error body text kept for diagnostics.
const MAX_ERROR_BODY: usize = 2048;

/// Deadline for the non-streaming path. Streaming requests have no
/// whole-request deadline; a stalled stream is the caller's problem to
/// abandon.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// An active conversation with the assistant back end.
pub struct HttpSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: Option<u32>,
    history: Arc<Mutex<Vec<ChatMessage>>>,
}

impl HttpSession {
    pub fn new(
        client: reqwest::Client,
        endpoint: String,
        api_key: Option<String>,
        model: String,
        max_tokens: Option<u32>,
        system_prompt: Option<String>,
    ) -> Self {
        let mut history = Vec::new();
        if let Some(prompt) = system_prompt {
            history.push(ChatMessage::system(prompt));
        }
        Self {
            client,
            endpoint,
            api_key,
            model,
            max_tokens,
            history: Arc::new(Mutex::new(history)),
        }
    }

    /// Append the user message and snapshot the history for the request.
    async fn push_user_message(&self, content: &str) -> Vec<ChatMessage> {
        let mut history = self.history.lock().await;
        history.push(ChatMessage::user(content));
        history.clone()
    }

    /// Issue the POST and fail on transport errors or non-success status.
    async fn post_chat(
        &self,
        messages: &[ChatMessage],
        stream: bool,
    ) -> Result<reqwest::Response, GatewayError> {
        let body = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            stream,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if !stream {
            request = request.timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::ConnectionError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = preview(&body, MAX_ERROR_BODY).into_owned();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl LlmSession for HttpSession {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let messages = self.push_user_message(content).await;
        debug!(
            "Sending to {} ({} messages, non-streaming)",
            self.endpoint,
            messages.len()
        );

        let response = self.post_chat(&messages, false).await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        let text = extract_complete(&value);
        if text.is_empty() {
            warn!("Response body carried no recognizable text");
        }

        self.history
            .lock()
            .await
            .push(ChatMessage::assistant(text.clone()));
        Ok(text)
    }

    async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError> {
        let messages = self.push_user_message(content).await;
        debug!(
            "Sending to {} ({} messages, streaming)",
            self.endpoint,
            messages.len()
        );

        let response = self.post_chat(&messages, true).await?;
        let byte_stream = response.bytes_stream();

        let (tx, rx) = mpsc::unbounded_channel();
        let history = Arc::clone(&self.history);

        tokio::spawn(async move {
            let tx_delta = tx.clone();
            let consume = read_sse_stream(byte_stream, |delta, _| {
                let _ = tx_delta.send(StreamEvent::Delta(delta.to_string()));
            });

            tokio::select! {
                biased;
                // Receiver dropped: the caller abandoned the stream
                _ = tx.closed() => {
                    debug!("Stream receiver dropped; abandoning read loop");
                }
                result = consume => match result {
                    Ok(full) => {
                        history.lock().await.push(ChatMessage::assistant(full.clone()));
                        let _ = tx.send(StreamEvent::Completed(full));
                    }
                    Err(e) => {
                        let _ = tx.send(StreamEvent::Error(e.to_string()));
                    }
                },
            }
        });

        Ok(StreamHandle::new(rx))
    }
}
