// Core logic in pure Rust, exported to the page through wasm-bindgen wrappers.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod actions;
pub mod config;
pub mod country;
pub mod error;
pub mod form;
pub mod link;
pub mod logging;
pub mod phone;
pub mod preview;

pub use config::Config;
pub use country::{Continent, Country};
pub use form::{LinkForm, PhoneEdit};
pub use phone::ValidationResult;

/// A country as the selector renders it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountryOption {
    code: &'static str,
    name: &'static str,
    continent: Continent,
    flag: String,
    label: String,
}

impl From<&'static Country> for CountryOption {
    fn from(country: &'static Country) -> Self {
        CountryOption {
            code: &country.code,
            name: &country.name,
            continent: country.continent,
            flag: country.flag(),
            label: country.label(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CountryGroupOption {
    continent: Continent,
    countries: Vec<CountryOption>,
}

fn country_groups_internal(query: &str) -> Vec<CountryGroupOption> {
    country::group_by_continent(&country::search(query))
        .into_iter()
        .map(|group| CountryGroupOption {
            continent: group.continent,
            countries: group.countries.into_iter().map(CountryOption::from).collect(),
        })
        .collect()
}

fn serialize<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    to_value(value).map_err(|e| JsError::new(&format!("Failed to serialize {}: {}", what, e)))
}

/// Validates the host config, applies its log level and hands it back with
/// defaults filled in.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<JsValue, JsError> {
    let config = Config::from_js(config)?;
    logging::init(config.level_filter()?);
    log::info!("chat_link ready, default country +{}", config.default_country_code);
    serialize(&config, "config")
}

#[wasm_bindgen(js_name = sanitizePhone)]
pub fn sanitize_phone(raw: &str) -> String {
    phone::sanitize(raw)
}

#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone(digits: &str) -> String {
    phone::format(digits)
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone(digits: &str) -> Result<JsValue, JsError> {
    serialize(&phone::validate(digits), "validation")
}

#[wasm_bindgen(js_name = maskPhone)]
pub fn mask_phone(value: &str, previous: &str) -> String {
    phone::mask(value, previous)
}

#[wasm_bindgen(js_name = nextCursorPosition)]
pub fn next_cursor_position(formatted: &str, previous: &str, caret: usize) -> usize {
    phone::next_cursor_position(formatted, previous, caret)
}

#[wasm_bindgen(js_name = flagFor)]
pub fn flag_for(country_code: &str) -> String {
    country::flag_for(country_code)
}

#[wasm_bindgen(js_name = buildLink)]
pub fn build_link(country_code: &str, phone: &str, message: &str) -> String {
    link::build_link(country_code, phone, message)
}

#[wasm_bindgen(js_name = searchCountries)]
pub fn search_countries(query: &str) -> Result<JsValue, JsError> {
    let options: Vec<CountryOption> = country::search(query)
        .into_iter()
        .map(CountryOption::from)
        .collect();
    serialize(&options, "countries")
}

#[wasm_bindgen(js_name = countryGroups)]
pub fn country_groups(query: &str) -> Result<JsValue, JsError> {
    serialize(&country_groups_internal(query), "country groups")
}

#[wasm_bindgen(js_name = countryLabel)]
pub fn country_label(country_code: &str) -> String {
    country::display_label(country_code).unwrap_or_default()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen_test::*;
    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_wasm_validate() {
        let result: serde_json::Value = from_value(validate_phone("123456").unwrap()).unwrap();
        assert_eq!(result["isValid"], false);
        assert_eq!(result["reason"], "too_short");
        assert_eq!(result["error"], "Phone number is too short");

        let result: serde_json::Value = from_value(validate_phone("5551234567").unwrap()).unwrap();
        assert_eq!(result["isValid"], true);
    }

    #[wasm_bindgen_test]
    fn test_wasm_configure_defaults() {
        let config: Config = from_value(configure(JsValue::UNDEFINED).unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[wasm_bindgen_test]
    fn test_wasm_search_countries() {
        let countries: serde_json::Value = from_value(search_countries("+44").unwrap()).unwrap();
        let countries = countries.as_array().unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0]["code"], "44");
        assert_eq!(countries[0]["continent"], "Europe");
    }

    #[wasm_bindgen_test]
    fn test_wasm_form() {
        let mut form = LinkForm::new();
        let edit = form.edit_phone("2012345678", 10);
        assert_eq!(edit.value, "201 234 5678");
        form.set_country_code("44").unwrap();
        assert!(form.set_country_code("999").is_err());
        form.set_message("hi there");
        assert_eq!(form.link(), "https://wa.me/442012345678?text=hi%20there");
        assert_eq!(form.preview_contact(), "+44 201 234 5678");
        assert_eq!(form.avatar(), "(◕‿◕✿)");
    }

    #[wasm_bindgen_test]
    fn test_wasm_open_empty_link() {
        assert!(!actions::open_chat(""));
    }

    #[wasm_bindgen_test]
    async fn test_wasm_copy_empty_link() {
        assert!(!actions::copy_to_clipboard(String::new()).await);
    }
}
