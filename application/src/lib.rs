//! Application layer for statehouse
//!
//! This crate contains use cases and port definitions. It depends only
//! on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    bill_gateway::{BillGateway, BillLookupError},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, SessionOptions, StreamHandle},
    progress::{SilentProgress, StreamProgress},
    transcript::{NoTranscriptLogger, TranscriptLogger},
};
pub use use_cases::ask_assistant::{AskAssistantUseCase, AskError, AskInput, AskOutcome};
pub use use_cases::view_bill::{BillView, ViewBillUseCase};
