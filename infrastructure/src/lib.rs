//! Infrastructure layer for statehouse
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the streaming chat completions client,
//! the Open Legislation bill API client, configuration file loading,
//! and transcript persistence.

pub mod assistant;
pub mod config;
pub mod openleg;
pub mod sse;
pub mod transcript;

// Re-export commonly used types
pub use assistant::{HttpLlmGateway, HttpSession};
pub use config::{
    ConfigError, ConfigLoader, FileAssistantConfig, FileConfig, FileOpenLegConfig,
    FileOutputConfig,
};
pub use openleg::OpenLegClient;
pub use sse::{extract_complete, extract_delta, read_sse_stream};
pub use transcript::JsonlTranscriptLogger;
