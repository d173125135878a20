//! UI settings
//!
//! Settings are bundled into the binary from `registration.json` and handed
//! to components through Leptos context.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const BUNDLED_SETTINGS: &str = include_str!("../registration.json");

pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Text of the submit button
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    /// Helper text shown under a blank required field
    #[serde(default = "default_required_message")]
    pub required_message: String,
    /// How long the "submitted" notice stays visible
    #[serde(default = "default_notice_millis")]
    pub notice_millis: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_submit_label() -> String {
    "Enviar".to_string()
}

fn default_required_message() -> String {
    DEFAULT_REQUIRED_MESSAGE.to_string()
}

fn default_notice_millis() -> u32 {
    3000
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            submit_label: default_submit_label(),
            required_message: default_required_message(),
            notice_millis: default_notice_millis(),
        }
    }
}

impl UiSettings {
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Settings shipped with the build
    pub fn bundled() -> Result<Self, FormError> {
        Self::from_json(BUNDLED_SETTINGS)
    }

    /// Log level, falling back to `Info` for unknown names
    pub fn level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_settings_parse() {
        let settings = UiSettings::bundled().expect("bundled settings must parse");
        assert_eq!(settings.submit_label, "Enviar");
        assert_eq!(settings.required_message, DEFAULT_REQUIRED_MESSAGE);
        assert_eq!(settings.level(), log::Level::Info);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = UiSettings::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(settings.level(), log::Level::Debug);
        assert_eq!(settings.submit_label, "Enviar");
        assert_eq!(settings.notice_millis, 3000);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let settings = UiSettings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.level(), log::Level::Info);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = UiSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FormError::Config(_)));
    }
}
