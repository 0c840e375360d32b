use super::{format, sanitize, MAX_DIGITS};

/// Reformats the input box content after one edit.
///
/// `value` is the raw content after the edit, `previous` what the box held
/// before it. The result is always re-derived from digits, never patched:
/// - a deletion is honoured even if it leaves an awkward grouping
/// - an edit that would exceed [`MAX_DIGITS`] is dropped and the previous
///   value is kept
pub fn mask(value: &str, previous: &str) -> String {
    let digits = sanitize(value);
    let old_digits = sanitize(previous);

    if digits.len() < old_digits.len() {
        return format(&digits);
    }

    if digits.len() > MAX_DIGITS {
        log::debug!(
            "dropping edit: {} digits exceeds the limit of {}",
            digits.len(),
            MAX_DIGITS
        );
        return format(&old_digits);
    }

    format(&digits)
}

/// Where the caret belongs once `formatted` has been committed to the input.
///
/// Must be applied after the host has rendered the new value. On deletion the
/// caret steps back one position; otherwise it is pushed right by the number
/// of separators that now sit in front of it.
pub fn next_cursor_position(formatted: &str, previous: &str, caret: usize) -> usize {
    if formatted.chars().count() < previous.chars().count() {
        return caret.saturating_sub(1);
    }

    let reformatted = format(formatted);
    let separators = reformatted
        .chars()
        .take(caret)
        .filter(|c| *c == ' ')
        .count();

    (caret + separators).min(reformatted.chars().count())
}
