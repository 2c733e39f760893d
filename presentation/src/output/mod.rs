//! Console output formatting

mod bill;

pub use bill::BillCard;
