//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod bill_gateway;
pub mod llm_gateway;
pub mod progress;
pub mod transcript;
