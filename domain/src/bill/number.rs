//! Bill number value object and normalization.
//!
//! New York State bill print numbers start with a chamber/type prefix
//! letter, followed by the print number digits, optionally followed by a
//! single amendment letter (`S1528`, `A405B`). The canonical form used for
//! internal routes zero-pads the digit run to five places (`S01528`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chamber/type prefix letters that can start a bill number.
///
/// `A` Assembly bill, `S` Senate bill, `J` joint resolution, `K` concurrent
/// resolution.
pub const BILL_PREFIXES: [char; 4] = ['A', 'S', 'J', 'K'];

/// Returns true if `ch` is a recognized bill prefix letter (uppercase only).
pub fn is_bill_prefix(ch: char) -> bool {
    BILL_PREFIXES.contains(&ch)
}

/// Error returned when a string is not a well-formed bill number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a bill number: {0:?}")]
pub struct ParseBillNumberError(pub String);

/// A validated NY State bill print number (Value Object).
///
/// Always stored in canonical form: uppercase prefix, digit run padded to
/// at least five places, optional uppercase amendment letter. Two inputs
/// that differ only in case or zero-padding compare equal:
/// `S256`, `s256`, and `S00256` all parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BillNumber {
    prefix: char,
    digits: String,
    amendment: Option<char>,
}

impl BillNumber {
    /// Parse a bill number, accepting any zero-padding and letter case.
    ///
    /// The input is trimmed and uppercased before validation. Accepts one
    /// prefix letter from [`BILL_PREFIXES`], one or more digits, and an
    /// optional single trailing letter.
    pub fn parse(input: &str) -> Result<Self, ParseBillNumberError> {
        let raw = input.trim();
        let upper = raw.to_uppercase();
        let mut chars = upper.chars();

        let prefix = match chars.next() {
            Some(ch) if is_bill_prefix(ch) => ch,
            _ => return Err(ParseBillNumberError(raw.to_string())),
        };

        let rest: String = chars.collect();
        let digit_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digit_end == 0 {
            return Err(ParseBillNumberError(raw.to_string()));
        }

        let digits = &rest[..digit_end];
        let amendment = match rest[digit_end..].chars().collect::<Vec<_>>().as_slice() {
            [] => None,
            [ch] if ch.is_ascii_uppercase() => Some(*ch),
            _ => return Err(ParseBillNumberError(raw.to_string())),
        };

        Ok(Self {
            prefix,
            digits: pad_digits(digits),
            amendment,
        })
    }

    /// The chamber/type prefix letter.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// The amendment letter, if any.
    pub fn amendment(&self) -> Option<char> {
        self.amendment
    }

    /// The canonical string form, e.g. `S00256` or `S00256A`.
    pub fn canonical(&self) -> String {
        match self.amendment {
            Some(a) => format!("{}{}{}", self.prefix, self.digits, a),
            None => format!("{}{}", self.prefix, self.digits),
        }
    }

    /// The print number without padding, e.g. `S256A`, as the Open
    /// Legislation API expects it.
    pub fn print_no(&self) -> String {
        let unpadded = self.digits.trim_start_matches('0');
        let unpadded = if unpadded.is_empty() { "0" } else { unpadded };
        match self.amendment {
            Some(a) => format!("{}{}{}", self.prefix, unpadded, a),
            None => format!("{}{}", self.prefix, unpadded),
        }
    }
}

impl fmt::Display for BillNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl FromStr for BillNumber {
    type Err = ParseBillNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BillNumber::parse(s)
    }
}

impl Serialize for BillNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for BillNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BillNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Canonicalize a bill-number string for display and link construction.
///
/// Trims and uppercases the input; if the result is one letter, a digit
/// run, and an optional trailing letter, the digit run is zero-padded to
/// five places and the pieces reassembled. Any other shape passes through
/// uppercased and otherwise unchanged, so callers never have to handle an
/// error. Empty input yields an empty string. Idempotent.
///
/// Unlike [`BillNumber::parse`], this accepts any prefix letter: it is a
/// formatting helper, not a validator.
pub fn normalize(input: &str) -> String {
    let upper = input.trim().to_uppercase();
    if upper.is_empty() {
        return upper;
    }

    let mut chars = upper.chars();
    let Some(first) = chars.next() else {
        return upper;
    };
    if !first.is_ascii_uppercase() {
        return upper;
    }

    let rest: String = chars.collect();
    let digit_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digit_end == 0 {
        return upper;
    }

    let suffix = &rest[digit_end..];
    let suffix_ok = suffix.is_empty()
        || (suffix.len() == 1 && suffix.chars().all(|c| c.is_ascii_uppercase()));
    if !suffix_ok {
        return upper;
    }

    format!("{}{}{}", first, pad_digits(&rest[..digit_end]), suffix)
}

/// Zero-pad a digit run to at least five places. Runs already five or
/// more digits long are kept as-is.
fn pad_digits(digits: &str) -> String {
    if digits.len() >= 5 {
        digits.to_string()
    } else {
        format!("{:0>5}", digits)
    }
}
