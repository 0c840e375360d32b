// Contact preview shown under the form: an avatar face and the dial line.

use crate::phone::sanitize;

/// Avatar face per leading digit of the number.
static AVATAR_EXPRESSIONS: &[(char, &str)] = &[
    ('0', "(｡◕‿◕｡)"),
    ('1', "(￣ω￣)"),
    ('2', "(◕‿◕✿)"),
    ('3', "(｀・ω・´)"),
    ('4', "(＾▽＾)"),
    ('5', "(・∀・)"),
    ('6', "(◠‿◠)"),
    ('7', "(｀･ω･´)ゞ"),
    ('8', "(★‿★)"),
    ('9', "(^_−)−☆"),
];

/// Shown while there is no number yet.
pub const UNKNOWN_AVATAR: &str = "(・・?)";

/// Face for the first digit of `formatted`, or [`UNKNOWN_AVATAR`] when empty.
pub fn preview_avatar(formatted: &str) -> &'static str {
    if formatted.is_empty() {
        return UNKNOWN_AVATAR;
    }
    let first = sanitize(formatted).chars().next().unwrap_or('0');
    AVATAR_EXPRESSIONS
        .iter()
        .find(|(digit, _)| *digit == first)
        .map(|(_, face)| *face)
        .unwrap_or(UNKNOWN_AVATAR)
}

/// `+<code> <formatted number>`, empty while there is no number.
pub fn preview_contact(country_code: &str, formatted: &str) -> String {
    if formatted.is_empty() {
        return String::new();
    }
    format!("+{} {}", country_code, formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_per_leading_digit() {
        let test_cases = vec![
            ("012 3456", "(｡◕‿◕｡)"),
            ("1 234", "(￣ω￣)"),
            ("2", "(◕‿◕✿)"),
            ("345 6789", "(｀・ω・´)"),
            ("4", "(＾▽＾)"),
            ("555 123 4567", "(・∀・)"),
            ("6", "(◠‿◠)"),
            ("7", "(｀･ω･´)ゞ"),
            ("8", "(★‿★)"),
            ("9", "(^_−)−☆"),
            ("", "(・・?)"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(preview_avatar(input), expected, "Failed for input: {:?}", input);
        }
    }

    #[test]
    fn test_avatar_without_digits_uses_zero_face() {
        assert_eq!(preview_avatar(" "), "(｡◕‿◕｡)");
    }

    #[test]
    fn test_preview_contact() {
        assert_eq!(preview_contact("44", "201 234 5678"), "+44 201 234 5678");
        assert_eq!(preview_contact("1", ""), "");
    }
}
