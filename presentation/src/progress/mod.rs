//! Progress reporting

mod reporter;

pub use reporter::StreamPrinter;
