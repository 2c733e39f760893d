//! HTTP assistant gateway implementation

use crate::assistant::session::HttpSession;
use async_trait::async_trait;
use statehouse_application::ports::llm_gateway::{
    GatewayError, LlmGateway, LlmSession, SessionOptions,
};
use tracing::info;

/// Path of the chat-completions endpoint under the configured base URL.
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// The client gets a connect timeout only. A whole-request deadline
/// would cut off streaming replies mid-body; the non-streaming path
/// applies its own per-request timeout instead.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Gateway implementation over an OpenAI-style HTTP back end.
pub struct HttpLlmGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpLlmGateway {
    /// Create a gateway for the given base URL, e.g.
    /// `https://api.example.com/v1`.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("HttpLlmGateway initialized for {}", base_url);

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn open_session(
        &self,
        options: &SessionOptions,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let session = HttpSession::new(
            self.client.clone(),
            self.endpoint(),
            self.api_key.clone(),
            options.model.clone(),
            options.max_tokens,
            options.system_prompt.clone(),
        );
        Ok(Box::new(session))
    }
}
