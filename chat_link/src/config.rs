use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::country;
use crate::error::ConfigError;

/// Host-provided settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_country_code: String,
    pub log_level: String,
    /// Longest pre-filled message `LinkForm` keeps, in characters.
    pub max_message_chars: usize,
    /// How long the host keeps the "copied" indicator up. Not read by this
    /// crate; `configure` hands it back to the page with the defaults filled.
    pub copy_feedback_ms: u32,
    /// Busy-indicator delay before the host opens the chat link. Host only,
    /// like `copy_feedback_ms`.
    pub open_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_country_code: "1".to_string(),
            log_level: "info".to_string(),
            max_message_chars: 2000,
            copy_feedback_ms: 2000,
            open_delay_ms: 300,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config object passed from JavaScript. `undefined` and `null`
    /// give the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Config::default());
        }
        let config: Config = serde_wasm_bindgen::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if country::find(&self.default_country_code).is_none() {
            return Err(ConfigError::UnknownDefaultCountry(
                self.default_country_code.clone(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config =
            Config::from_json(r#"{"defaultCountryCode": "44", "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.default_country_code, "44");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!(config.open_delay_ms, 300);
        assert_eq!(config.max_message_chars, 2000);
    }

    #[test]
    fn test_host_timings_round_trip_to_the_page() {
        let config =
            Config::from_json(r#"{"copyFeedbackMs": 1500, "maxMessageChars": 500}"#).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["copyFeedbackMs"], 1500);
        assert_eq!(json["openDelayMs"], 300);
        assert_eq!(json["maxMessageChars"], 500);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_json(r#"{"defaultCountryCode": "999"}"#),
            Err(ConfigError::UnknownDefaultCountry(code)) if code == "999"
        ));
        assert!(matches!(
            Config::from_json(r#"{"logLevel": "loud"}"#),
            Err(ConfigError::LogLevel(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"copyFeedbackMs": "soon"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(Config::from_json("not json"), Err(ConfigError::Parse(_))));
    }
}
