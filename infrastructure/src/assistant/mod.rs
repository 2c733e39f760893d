//! Assistant back-end adapter.
//!
//! Implements the [`LlmGateway`](statehouse_application::LlmGateway) and
//! [`LlmSession`](statehouse_application::LlmSession) ports over an
//! OpenAI-style chat-completions HTTP API.

pub mod gateway;
pub mod session;
pub mod wire;

pub use gateway::HttpLlmGateway;
pub use session::HttpSession;
