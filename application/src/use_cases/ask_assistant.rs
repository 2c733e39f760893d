//! Ask Assistant use case.
//!
//! Executes one question/answer exchange: opens a session, streams the
//! reply through the progress port, and returns the full text with bill
//! references auto-linked.
//!
//! Cancellation is caller-owned: the caller may pass a
//! [`CancellationToken`] (wired to Ctrl-C in the chat REPL) and the
//! stream is abandoned as soon as it fires.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, SessionOptions};
use crate::ports::progress::StreamProgress;
use crate::ports::transcript::{NoTranscriptLogger, TranscriptLogger};
use statehouse_domain::util::preview;
use statehouse_domain::{ChatTurn, autolink_bill_references};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// System prompt establishing the assistant persona.
///
/// Asking for print numbers in replies is what makes auto-linking land:
/// the linker only recognizes the `S1528` / `A405B` token shape.
const SYSTEM_PROMPT: &str = "You are a legislative research assistant for New York State. \
Answer questions about bills, resolutions, sponsors, and the legislative process. \
Refer to bills by their print number (for example S1528 or A405B). \
Format answers as markdown.";

/// Errors that can occur during an ask exchange.
#[derive(Error, Debug)]
pub enum AskError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Cancelled")]
    Cancelled,

    #[error("No response from model")]
    EmptyReply,
}

/// Input for the [`AskAssistantUseCase`].
#[derive(Debug, Clone)]
pub struct AskInput {
    /// The user's question.
    pub question: String,
    /// Session parameters. A missing system prompt is filled with the
    /// assistant persona.
    pub options: SessionOptions,
}

impl AskInput {
    pub fn new(question: impl Into<String>, options: SessionOptions) -> Self {
        Self {
            question: question.into(),
            options,
        }
    }
}

/// Result of a completed ask exchange.
#[derive(Debug, Clone)]
pub struct AskOutcome {
    /// The reply exactly as accumulated from the stream.
    pub raw: String,
    /// The reply with bare bill references turned into internal links.
    pub linked: String,
}

/// Use case for one question/answer exchange with the assistant.
pub struct AskAssistantUseCase {
    gateway: Arc<dyn LlmGateway>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl AskAssistantUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Open a session, filling in the assistant persona when the caller
    /// has no system prompt of its own.
    ///
    /// The chat REPL opens one session and runs many [`Self::ask`]
    /// exchanges on it so the conversation keeps its history.
    pub async fn open_session(
        &self,
        options: &SessionOptions,
    ) -> Result<Box<dyn LlmSession>, AskError> {
        let mut options = options.clone();
        if options.system_prompt.is_none() {
            options.system_prompt = Some(SYSTEM_PROMPT.to_string());
        }
        Ok(self.gateway.open_session(&options).await?)
    }

    /// Run one exchange on an already open session.
    ///
    /// When `cancellation` is given and fires mid-stream the exchange
    /// returns [`AskError::Cancelled`]; deltas already delivered to
    /// `progress` stand, but nothing is logged to the transcript.
    pub async fn ask(
        &self,
        session: &dyn LlmSession,
        question: &str,
        progress: &dyn StreamProgress,
        cancellation: Option<&CancellationToken>,
    ) -> Result<AskOutcome, AskError> {
        info!("Starting ask: {}", preview(question, 100));
        let model = session.model().to_string();

        progress.on_stream_start();
        let handle = session.send_streaming(question).await?;

        let collect = handle.collect_with(|chunk, total| progress.on_delta(chunk, total));
        let raw = match cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        progress.on_stream_end();
                        debug!("Ask cancelled mid-stream");
                        return Err(AskError::Cancelled);
                    }
                    result = collect => result?,
                }
            }
            None => collect.await?,
        };
        progress.on_stream_end();

        if raw.is_empty() {
            return Err(AskError::EmptyReply);
        }

        let linked = autolink_bill_references(&raw);
        debug!(bytes = raw.len(), model = %model, "Ask completed");

        self.transcript
            .log_turn(&ChatTurn::new(model, question, &linked));

        Ok(AskOutcome { raw, linked })
    }

    /// Execute a one-shot exchange: open a session, ask, done.
    pub async fn execute(
        &self,
        input: AskInput,
        progress: &dyn StreamProgress,
        cancellation: Option<&CancellationToken>,
    ) -> Result<AskOutcome, AskError> {
        let session = self.open_session(&input.options).await?;
        self.ask(session.as_ref(), &input.question, progress, cancellation)
            .await
    }
}
