//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Status and body text of a completed HTTP exchange.
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl HttpResponse {
    /// Returns whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn http_request(
    method: &str,
    url: &str,
    authorization: Option<&str>,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    imp::http_request(method, url, authorization, json_body).await
}

pub fn location_href() -> Result<String, String> {
    imp::location_href()
}

pub fn location_assign(url: &str) -> Result<(), String> {
    imp::location_assign(url)
}

pub fn location_replace(url: &str) -> Result<(), String> {
    imp::location_replace(url)
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    imp::local_storage_get(key)
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    imp::local_storage_set(key, value)
}

pub fn app_config_json() -> Result<Option<String>, String> {
    imp::app_config_json()
}

pub fn install_prompt_listen() {
    imp::install_prompt_listen()
}

pub fn install_prompt_available() -> bool {
    imp::install_prompt_available()
}

pub async fn install_prompt_show() -> Result<String, String> {
    imp::install_prompt_show().await
}
