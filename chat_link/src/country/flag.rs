// Flag emoji rendering for calling codes.

use super::find;

/// Calling codes whose flag is not the single region flag of the directory
/// entry. Checked before the general rule.
static FLAG_OVERRIDES: &[(&str, &str)] = &[
    // Shared by the United States and Canada
    ("1", "\u{1F1FA}\u{1F1F8} \u{1F1E8}\u{1F1E6}"),
];

/// Codepoint of REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Flag emoji for a calling code, or an empty string for unknown codes.
pub fn flag_for(country_code: &str) -> String {
    if let Some((_, flag)) = FLAG_OVERRIDES
        .iter()
        .find(|(code, _)| *code == country_code)
    {
        return flag.to_string();
    }

    find(country_code)
        .and_then(|country| country.region.as_deref())
        .and_then(regional_indicators)
        .unwrap_or_default()
}

/// Turns an ISO 3166-1 alpha-2 region code into its pair of regional
/// indicator symbols. `None` if the code contains anything but ASCII letters.
pub fn regional_indicators(region: &str) -> Option<String> {
    region
        .chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}
