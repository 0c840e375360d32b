// State of the link generator form: country, phone and message.

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::country;
use crate::error::FormError;
use crate::link::build_link;
use crate::phone::{mask, next_cursor_position, validate, ValidationResult};
use crate::preview::{preview_avatar, preview_contact};

/// Result of one edit in the phone input.
///
/// The host writes `value` into the input first and moves the caret to
/// `caret` only once that value has been rendered.
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdit {
    pub value: String,
    pub caret: usize,
}

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LinkForm {
    country_code: String,
    phone: String,
    message: String,
    max_message_chars: usize,
}

impl LinkForm {
    pub fn with_config(config: &Config) -> Self {
        LinkForm {
            country_code: config.default_country_code.clone(),
            phone: String::new(),
            message: String::new(),
            max_message_chars: config.max_message_chars,
        }
    }

    pub fn select_country(&mut self, code: &str) -> Result<(), FormError> {
        let country =
            country::find(code).ok_or_else(|| FormError::UnknownCountry(code.to_string()))?;
        log::debug!("selected country {} ({})", country.code, country.name);
        self.country_code = country.code.clone();
        Ok(())
    }

    pub fn validation(&self) -> ValidationResult {
        validate(&self.phone)
    }
}

#[wasm_bindgen]
impl LinkForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LinkForm {
        LinkForm::with_config(&Config::default())
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn from_js_config(config: JsValue) -> Result<LinkForm, JsError> {
        let config = Config::from_js(config)?;
        Ok(LinkForm::with_config(&config))
    }

    #[wasm_bindgen(getter = countryCode)]
    pub fn country_code(&self) -> String {
        self.country_code.clone()
    }

    #[wasm_bindgen(js_name = setCountryCode)]
    pub fn set_country_code(&mut self, code: &str) -> Result<(), JsError> {
        self.select_country(code)?;
        Ok(())
    }

    /// Formatted phone number as currently displayed.
    #[wasm_bindgen(getter)]
    pub fn phone(&self) -> String {
        self.phone.clone()
    }

    /// Applies one edit of the phone input. `raw` is the input content after
    /// the edit and `caret` the selection start the browser reported.
    #[wasm_bindgen(js_name = editPhone)]
    pub fn edit_phone(&mut self, raw: &str, caret: usize) -> PhoneEdit {
        let value = mask(raw, &self.phone);
        let caret = next_cursor_position(&value, &self.phone, caret);
        self.phone = value.clone();
        PhoneEdit { value, caret }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Stores the message, cut to `max_message_chars` characters.
    #[wasm_bindgen(js_name = setMessage)]
    pub fn set_message(&mut self, message: &str) {
        self.message = message.chars().take(self.max_message_chars).collect();
    }

    /// Face shown in the preview, picked by the first digit.
    #[wasm_bindgen(getter)]
    pub fn avatar(&self) -> String {
        preview_avatar(&self.phone).to_string()
    }

    /// `+<code> <number>` line of the preview, empty until a number is typed.
    #[wasm_bindgen(getter = previewContact)]
    pub fn preview_contact(&self) -> String {
        preview_contact(&self.country_code, &self.phone)
    }

    #[wasm_bindgen(js_name = validation)]
    pub fn validation_js(&self) -> Result<JsValue, JsError> {
        to_value(&self.validation())
            .map_err(|e| JsError::new(&format!("Failed to serialize validation: {}", e)))
    }

    /// Error to show under the input. Empty until the user has typed something.
    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self) -> String {
        if self.phone.is_empty() {
            return String::new();
        }
        self.validation().message().unwrap_or_default().to_string()
    }

    pub fn link(&self) -> String {
        build_link(&self.country_code, &self.phone, &self.message)
    }

    /// Whether copy and open should be enabled.
    #[wasm_bindgen(js_name = canSubmit)]
    pub fn can_submit(&self) -> bool {
        self.validation().is_valid && !self.link().is_empty()
    }

    #[wasm_bindgen(js_name = countryLabel)]
    pub fn country_label(&self) -> String {
        country::display_label(&self.country_code).unwrap_or_default()
    }
}

impl Default for LinkForm {
    fn default() -> Self {
        LinkForm::new()
    }
}
