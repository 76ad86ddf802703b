//! Page-load configuration and credential snapshots.

use platform_host::{AppConfig, AuthSession};
use serde::Deserialize;
use serde_json::Value;

use crate::bridge;

/// `localStorage` key holding persisted client state.
pub const HUBS_STORE_KEY: &str = "___hubs_store";

#[derive(Debug, Default, Deserialize)]
struct StoredCredentials {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    account_id: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredState {
    #[serde(default)]
    credentials: StoredCredentials,
}

/// Parses an injected `APP_CONFIG` JSON document.
///
/// # Errors
///
/// Returns an error when `raw` is not a valid configuration object.
pub fn parse_app_config(raw: &str) -> Result<AppConfig, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid APP_CONFIG: {e}"))
}

/// Builds an auth session from the persisted store document and the configured admin flag.
///
/// Unreadable or token-less documents produce an anonymous session.
pub fn parse_auth_session(raw_store: Option<&str>, is_admin: bool) -> AuthSession {
    let Some(raw_store) = raw_store else {
        return AuthSession::anonymous();
    };
    let stored: StoredState = serde_json::from_str(raw_store).unwrap_or_default();
    let Some(token) = stored.credentials.token.filter(|token| !token.is_empty()) else {
        return AuthSession::anonymous();
    };
    let account_id = match stored.credentials.account_id {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };
    AuthSession::signed_in(token, account_id, is_admin)
}

/// Loads the configuration injected into the page, or defaults when none is present.
pub fn load_app_config() -> AppConfig {
    match bridge::app_config_json() {
        Ok(Some(raw)) => parse_app_config(&raw).unwrap_or_else(|err| {
            leptos::logging::warn!("{err}");
            AppConfig::default()
        }),
        Ok(None) => AppConfig::default(),
        Err(err) => {
            leptos::logging::warn!("APP_CONFIG unavailable: {err}");
            AppConfig::default()
        }
    }
}

/// Loads the persisted credentials for this page load.
pub fn load_auth_session(config: &AppConfig) -> AuthSession {
    match bridge::local_storage_get(HUBS_STORE_KEY) {
        Ok(raw) => parse_auth_session(raw.as_deref(), config.is_admin),
        Err(err) => {
            leptos::logging::warn!("credential store unavailable: {err}");
            AuthSession::anonymous()
        }
    }
}
