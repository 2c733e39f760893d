//! Use cases (application services)

pub mod ask_assistant;
pub mod view_bill;
