use serde::Serialize;
use thiserror::Error;

/// Why a phone number is not accepted for submission.
///
/// This is carried as a value inside [`crate::phone::ValidationResult`] and is
/// never returned as an `Err`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPhone {
    #[error("Phone number is required")]
    Required,
    #[error("Phone number is too short")]
    TooShort,
    #[error("Phone number is too long")]
    TooLong,
    #[error("Invalid phone number pattern")]
    InvalidPattern,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown country calling code: {0}")]
    UnknownCountry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("default country code {0} is not in the country list")]
    UnknownDefaultCountry(String),
    #[error("invalid log level: {0}")]
    LogLevel(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ConfigError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Failures talking to the browser. Reported to the user, never retried.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to copy to clipboard: {0}")]
    Clipboard(String),
    #[error("failed to open link: {0}")]
    Navigation(String),
    #[error("the new window was blocked")]
    PopupBlocked,
}
