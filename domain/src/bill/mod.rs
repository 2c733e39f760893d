//! Bill numbers, references, and auto-linking.

pub mod autolink;
pub mod detail;
pub mod number;

pub use autolink::autolink_bill_references;
pub use detail::{BillAction, BillDetail};
pub use number::{BILL_PREFIXES, BillNumber, ParseBillNumberError, is_bill_prefix, normalize};
