use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::phone::sanitize;

pub const CHAT_BASE_URL: &str = "https://wa.me/";

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `https://wa.me/<code><digits>[?text=<message>]`.
///
/// Returns an empty string when `phone` holds no digits. The number is not
/// validated here; callers gate their actions on [`crate::phone::validate`].
pub fn build_link(country_code: &str, phone: &str, message: &str) -> String {
    let digits = sanitize(phone);
    if digits.is_empty() {
        return String::new();
    }

    let mut link = format!("{}{}{}", CHAT_BASE_URL, country_code, digits);
    if !message.is_empty() {
        link.push_str("?text=");
        link.push_str(&encode_message(message));
    }
    link
}

/// Percent-encodes a message the way `encodeURIComponent` does.
pub fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, MESSAGE_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_link() {
        let test_cases = vec![
            // (country code, phone, message, expected)
            ("1", "5551234567", "", "https://wa.me/15551234567"),
            (
                "44",
                "2012345678",
                "hi there",
                "https://wa.me/442012345678?text=hi%20there",
            ),
            ("44", "201 234 5678", "", "https://wa.me/442012345678"),
            ("1", "(555) 123-4567", "", "https://wa.me/15551234567"),
            ("1", "", "hello", ""),
            ("1", "abc", "hello", ""),
        ];

        for (code, phone, message, expected) in test_cases {
            assert_eq!(
                build_link(code, phone, message),
                expected,
                "Failed for: {} {} {:?}",
                code,
                phone,
                message
            );
        }
    }

    #[test]
    fn test_no_validation_gate() {
        // Too short to be valid, still linked
        assert_eq!(build_link("7", "12", ""), "https://wa.me/712");
    }

    #[test]
    fn test_encode_message() {
        let test_cases = vec![
            ("hi there", "hi%20there"),
            ("a&b=c", "a%26b%3Dc"),
            ("what?#", "what%3F%23"),
            ("-_.!~*'()", "-_.!~*'()"),
            ("50% off + more", "50%25%20off%20%2B%20more"),
            ("line\nbreak", "line%0Abreak"),
            ("café", "caf%C3%A9"),
            ("👋", "%F0%9F%91%8B"),
            ("a/b:c", "a%2Fb%3Ac"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(encode_message(input), expected, "Failed for input: {}", input);
        }
    }
}
