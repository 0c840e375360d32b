use serde::Serialize;

use super::{sanitize, MAX_DIGITS, MIN_DIGITS};
use crate::error::InvalidPhone;

/// Outcome of checking a phone number for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: Option<InvalidPhone>,
    #[serde(rename = "error")]
    message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            reason: None,
            message: None,
        }
    }

    fn invalid(reason: InvalidPhone) -> Self {
        ValidationResult {
            is_valid: false,
            message: Some(reason.to_string()),
            reason: Some(reason),
        }
    }

    /// Human readable message, `None` when the number is valid.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Checks digit-count bounds and rejects numbers made of one repeated digit.
///
/// This is a plausibility check, not number verification: a well-formed but
/// unassigned number passes.
pub fn validate(value: &str) -> ValidationResult {
    let digits = sanitize(value);
    let len = digits.len();

    let reason = if len == 0 {
        Some(InvalidPhone::Required)
    } else if len < MIN_DIGITS {
        Some(InvalidPhone::TooShort)
    } else if len > MAX_DIGITS {
        Some(InvalidPhone::TooLong)
    } else if is_single_repeated_digit(&digits) {
        Some(InvalidPhone::InvalidPattern)
    } else {
        None
    };

    match reason {
        Some(reason) => {
            log::trace!("rejected phone number with {} digits: {}", len, reason);
            ValidationResult::invalid(reason)
        }
        None => ValidationResult::valid(),
    }
}

// Any length >= 2 counts; the length rules above already rule out runs shorter
// than MIN_DIGITS, so this also covers "seven or more of the same digit".
fn is_single_repeated_digit(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => digits.len() > 1 && chars.all(|c| c == first),
        None => false,
    }
}
