//! Bill-reference auto-linking in markdown text.
//!
//! Scans assistant output for bare bill print numbers (`S1528`, `A405B`)
//! and replaces them with markdown links to the internal bill route
//! (`[S01528](/bills/S01528)`).
//!
//! # Strategy
//!
//! The text is first segmented into protected spans (existing markdown
//! links and images, inline code, fenced code blocks) and the token
//! scanner only runs over the plain text between them. Combined with the
//! boundary rules below this makes the pass idempotent: a token that was
//! linked on a previous pass now sits inside a link span and is never
//! rescanned.
//!
//! Boundary rules for a candidate token:
//! - the preceding character must not be `[` (already link text), `/`
//!   (a URL path segment), or a word character (substring of a longer
//!   token);
//! - the following character must not be `]`, `)`, a digit, or a word
//!   character (incomplete token).

use crate::bill::number::{BillNumber, is_bill_prefix};

/// Minimum digits for a bill token in running text. Shorter digit runs
/// (`S12`) are too ambiguous to link.
const MIN_TOKEN_DIGITS: usize = 3;

/// Replace bare bill references in `text` with markdown links.
///
/// Existing links, images, inline code, and fenced code blocks are left
/// untouched. Running the function over its own output is a no-op.
pub fn autolink_bill_references(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let protected = protected_spans(text, &chars);

    let mut out = String::with_capacity(text.len() + 64);
    let mut copied = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (pos, ch) = chars[i];

        if let Some(end) = span_end_at(pos, &protected) {
            while i < chars.len() && chars[i].0 < end {
                i += 1;
            }
            continue;
        }

        if is_bill_prefix(ch)
            && let Some(m) = try_match_token(&chars, i)
        {
            out.push_str(&text[copied..pos]);
            let canonical = m.bill.canonical();
            out.push('[');
            out.push_str(&canonical);
            out.push_str("](/bills/");
            out.push_str(&canonical);
            out.push(')');
            copied = m.end_byte;
            i = m.end_index;
            continue;
        }

        i += 1;
    }

    out.push_str(&text[copied..]);
    out
}

/// A bill token recognized in plain text.
struct TokenMatch {
    /// Byte offset one past the end of the token.
    end_byte: usize,
    /// Char index one past the end of the token.
    end_index: usize,
    bill: BillNumber,
}

/// Try to match a bill token starting at `chars[start]` (which the caller
/// has already identified as a prefix letter), applying both boundary
/// rules against the surrounding characters.
fn try_match_token(chars: &[(usize, char)], start: usize) -> Option<TokenMatch> {
    if start > 0 {
        let before = chars[start - 1].1;
        if before == '[' || before == '/' || is_word_char(before) {
            return None;
        }
    }

    let mut j = start + 1;
    let digits_from = j;
    while j < chars.len() && chars[j].1.is_ascii_digit() {
        j += 1;
    }
    if j - digits_from < MIN_TOKEN_DIGITS {
        return None;
    }

    if j < chars.len() && chars[j].1.is_ascii_uppercase() {
        j += 1;
    }

    if j < chars.len() {
        let after = chars[j].1;
        if after == ']' || after == ')' || after.is_ascii_digit() || is_word_char(after) {
            return None;
        }
    }

    let end_byte = match chars.get(j) {
        Some(&(pos, _)) => pos,
        None => chars.last().map(|&(p, c)| p + c.len_utf8())?,
    };

    let token: String = chars[start..j].iter().map(|&(_, c)| c).collect();
    let bill = BillNumber::parse(&token).ok()?;

    Some(TokenMatch {
        end_byte,
        end_index: j,
        bill,
    })
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Byte ranges that the token scanner must not touch, sorted and
/// non-overlapping: fenced code blocks, inline code spans, and complete
/// markdown link/image constructs.
fn protected_spans(text: &str, chars: &[(usize, char)]) -> Vec<(usize, usize)> {
    let mut spans = fenced_block_spans(text);

    let mut i = 0usize;
    while i < chars.len() {
        let (pos, ch) = chars[i];

        if let Some(end) = span_end_at(pos, &spans) {
            while i < chars.len() && chars[i].0 < end {
                i += 1;
            }
            continue;
        }

        match ch {
            '`' => {
                if let Some((end_byte, next_index)) = code_span_end(chars, i) {
                    spans.push((pos, end_byte));
                    i = next_index;
                    continue;
                }
                // Unmatched backtick run: treat as literal text.
                while i < chars.len() && chars[i].1 == '`' {
                    i += 1;
                }
            }
            '!' if matches!(chars.get(i + 1), Some(&(_, '['))) => {
                if let Some((end_byte, next_index)) = link_span_end(chars, i + 1) {
                    spans.push((pos, end_byte));
                    i = next_index;
                    continue;
                }
                i += 1;
            }
            '[' => {
                if let Some((end_byte, next_index)) = link_span_end(chars, i) {
                    spans.push((pos, end_byte));
                    i = next_index;
                    continue;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    spans.sort_unstable();
    spans
}

/// Spans of ``` fenced code blocks, including the fence lines. An
/// unclosed fence extends to the end of the text.
fn fenced_block_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut open_at: Option<usize> = None;
    let mut offset = 0usize;

    for line in text.split_inclusive('\n') {
        if line.trim_start().starts_with("```") {
            match open_at {
                None => open_at = Some(offset),
                Some(start) => {
                    spans.push((start, offset + line.len()));
                    open_at = None;
                }
            }
        }
        offset += line.len();
    }

    if let Some(start) = open_at {
        spans.push((start, text.len()));
    }
    spans
}

/// Given an opening backtick run at `chars[start]`, find the end of the
/// inline code span: the next backtick run of exactly the same length.
/// Returns `(end_byte, next_char_index)`.
fn code_span_end(chars: &[(usize, char)], start: usize) -> Option<(usize, usize)> {
    let mut i = start;
    while i < chars.len() && chars[i].1 == '`' {
        i += 1;
    }
    let open_len = i - start;

    while i < chars.len() {
        if chars[i].1 == '`' {
            let run_start = i;
            while i < chars.len() && chars[i].1 == '`' {
                i += 1;
            }
            if i - run_start == open_len {
                let end_byte = match chars.get(i) {
                    Some(&(pos, _)) => pos,
                    None => chars.last().map(|&(p, c)| p + c.len_utf8())?,
                };
                return Some((end_byte, i));
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Given `[` at `chars[start]`, find the end of a complete markdown link
/// construct `[text](target)`, honoring nested brackets and parentheses.
/// Returns `(end_byte, next_char_index)`, or `None` if the construct is
/// incomplete (no `](` pair or unbalanced delimiters).
fn link_span_end(chars: &[(usize, char)], start: usize) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    let mut i = start + 1;
    while i < chars.len() && depth > 0 {
        match chars[i].1 {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    if depth > 0 {
        return None;
    }

    if !matches!(chars.get(i), Some(&(_, '('))) {
        return None;
    }

    let mut paren_depth = 1usize;
    i += 1;
    while i < chars.len() && paren_depth > 0 {
        match chars[i].1 {
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            _ => {}
        }
        i += 1;
    }
    if paren_depth > 0 {
        return None;
    }

    let end_byte = match chars.get(i) {
        Some(&(pos, _)) => pos,
        None => chars.last().map(|&(p, c)| p + c.len_utf8())?,
    };
    Some((end_byte, i))
}

fn span_end_at(pos: usize, spans: &[(usize, usize)]) -> Option<usize> {
    spans
        .iter()
        .find(|&&(start, end)| pos >= start && pos < end)
        .map(|&(_, end)| end)
}
