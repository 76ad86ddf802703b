//! Runtime application configuration: feature flags, translations, and image URLs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only configuration lookups consumed by page components.
pub trait ConfigService {
    /// Returns whether the named feature flag is enabled.
    fn feature(&self, key: &str) -> bool;

    /// Returns the configured translation for `key`, if any.
    fn translation(&self, key: &str) -> Option<String>;

    /// Returns the configured image URL for `key`, if any.
    fn image(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Deserialized application configuration injected by the hosting page.
pub struct AppConfig {
    /// Feature flag values keyed by flag name.
    #[serde(default)]
    pub features: HashMap<String, Value>,
    /// Translation overrides keyed by message id.
    #[serde(default)]
    pub translations: HashMap<String, String>,
    /// Image URLs keyed by image slot name.
    #[serde(default)]
    pub images: HashMap<String, String>,
    /// Host name of the thumbnail scaling server.
    #[serde(default)]
    pub thumbnail_server: Option<String>,
    /// Whether the current account holds admin rights.
    #[serde(default)]
    pub is_admin: bool,
}

impl AppConfig {
    /// Sets a feature flag value.
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.features.insert(key.into(), value.into());
        self
    }

    /// Sets a translation override.
    pub fn with_translation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.translations.insert(key.into(), value.into());
        self
    }

    /// Sets an image URL.
    pub fn with_image(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.images.insert(key.into(), url.into());
        self
    }
}

/// Interprets a raw JSON flag value.
///
/// `true`, non-zero numbers, and non-empty strings other than `"false"` and `"0"` are enabled.
pub fn feature_enabled(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(enabled)) => *enabled,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(raw)) => {
            let raw = raw.trim();
            !raw.is_empty() && raw != "false" && raw != "0"
        }
        _ => false,
    }
}

impl ConfigService for AppConfig {
    fn feature(&self, key: &str) -> bool {
        feature_enabled(self.features.get(key))
    }

    fn translation(&self, key: &str) -> Option<String> {
        self.translations
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    fn image(&self, key: &str) -> Option<String> {
        self.images
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}

/// Resolves a translated message, falling back to `default_message`.
pub fn translate_or<C: ConfigService + ?Sized>(config: &C, key: &str, default_message: &str) -> String {
    config
        .translation(key)
        .unwrap_or_else(|| default_message.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn feature_truthiness_follows_json_value() {
        assert!(feature_enabled(Some(&json!(true))));
        assert!(feature_enabled(Some(&json!(1))));
        assert!(feature_enabled(Some(&json!("yes"))));
        assert!(!feature_enabled(Some(&json!(false))));
        assert!(!feature_enabled(Some(&json!(0))));
        assert!(!feature_enabled(Some(&json!(""))));
        assert!(!feature_enabled(Some(&json!("false"))));
        assert!(!feature_enabled(Some(&json!(null))));
        assert!(!feature_enabled(None));
    }

    #[test]
    fn deserializes_partial_config_with_defaults() {
        let config: AppConfig = serde_json::from_value(json!({
            "features": { "show_feature_panels": true },
            "images": { "home_background": "https://cdn.example/bg.jpg" }
        }))
        .expect("config");

        assert!(config.feature("show_feature_panels"));
        assert!(!config.feature("disable_room_creation"));
        assert_eq!(
            config.image("home_background").as_deref(),
            Some("https://cdn.example/bg.jpg")
        );
        assert_eq!(config.thumbnail_server, None);
        assert!(!config.is_admin);
    }

    #[test]
    fn translations_fall_back_to_default_message() {
        let config = AppConfig::default()
            .with_translation("app-description", "Meet in 3D")
            .with_translation("home-page.have-code", "  ");

        assert_eq!(
            translate_or(&config, "app-description", "fallback"),
            "Meet in 3D"
        );
        assert_eq!(
            translate_or(&config, "home-page.have-code", "Have a room code?"),
            "Have a room code?"
        );
    }
}
