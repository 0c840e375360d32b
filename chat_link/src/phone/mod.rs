mod mask;
mod validate;

pub use mask::{mask, next_cursor_position};
pub use validate::{validate, ValidationResult};

/// Hard cap on the number of digits a phone number may carry (E.164).
pub const MAX_DIGITS: usize = 15;
/// Shortest digit count accepted for submission.
pub const MIN_DIGITS: usize = 7;

const GROUP_SEPARATOR: char = ' ';

/// Strips every character that is not an ASCII digit, keeping the order of
/// the digits that remain. Never truncates.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups the digits of `value` for display.
///
/// The grouping depends only on the digit count:
/// - up to 3 digits: left as is
/// - 4 to 7 digits: `xxx xxxx` (the last four digits form the tail group)
/// - 8 to 10 digits: `xxx xxx xxxx`
/// - longer: groups of three until at most four digits remain
///
/// Input is sanitized first, so any string is accepted.
pub fn format(value: &str) -> String {
    let digits = sanitize(value);
    let len = digits.len();

    if len <= 3 {
        return digits;
    }

    let groups: Vec<&str> = if len <= 7 {
        vec![&digits[..len - 4], &digits[len - 4..]]
    } else if len <= 10 {
        vec![&digits[..3], &digits[3..6], &digits[6..]]
    } else {
        let mut groups = Vec::with_capacity(len / 3 + 1);
        let mut rest = digits.as_str();
        while rest.len() > 4 {
            let (head, tail) = rest.split_at(3);
            groups.push(head);
            rest = tail;
        }
        groups.push(rest);
        groups
    };

    let mut out = String::with_capacity(len + groups.len());
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push_str(group);
    }
    out
}
