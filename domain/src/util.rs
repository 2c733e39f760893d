//! Shared utility functions.

use std::borrow::Cow;

/// Shorten a string for log output.
///
/// Returns the input unchanged when it fits in `max_bytes`; otherwise cuts
/// at the nearest UTF-8 character boundary at or below `max_bytes` and
/// appends an ellipsis. Newlines are kept, so callers logging single-line
/// previews should pass already-flattened text.
pub fn preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}…", &s[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_borrowed() {
        assert!(matches!(preview("hi", 10), Cow::Borrowed("hi")));
    }

    #[test]
    fn long_input_is_cut_with_ellipsis() {
        assert_eq!(preview("hello world", 5), "hello…");
    }

    #[test]
    fn cut_backs_up_to_char_boundary() {
        // 'の' is 3 bytes; cutting at byte 4 lands inside it
        assert_eq!(preview("あのね", 4), "あ…");
        assert_eq!(preview("あのね", 6), "あの…");
    }

    #[test]
    fn exact_fit_is_unchanged() {
        assert_eq!(preview("あのね", 9), "あのね");
    }

    #[test]
    fn empty_input() {
        assert_eq!(preview("", 10), "");
    }
}
