//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Adapters call this module instead of `web_sys` directly so every browser API has a non-wasm
//! fallback with the same signature.

mod interop;

pub use interop::HttpResponse;

pub async fn get_json(url: &str, authorization: Option<&str>) -> Result<HttpResponse, String> {
    interop::http_request("GET", url, authorization, None).await
}

pub async fn post_json(
    url: &str,
    authorization: Option<&str>,
    body: &str,
) -> Result<HttpResponse, String> {
    interop::http_request("POST", url, authorization, Some(body)).await
}

pub fn location_href() -> Result<String, String> {
    interop::location_href()
}

pub fn location_assign(url: &str) -> Result<(), String> {
    interop::location_assign(url)
}

pub fn location_replace(url: &str) -> Result<(), String> {
    interop::location_replace(url)
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    interop::local_storage_get(key)
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    interop::local_storage_set(key, value)
}

pub fn app_config_json() -> Result<Option<String>, String> {
    interop::app_config_json()
}

pub fn install_prompt_listen() {
    interop::install_prompt_listen()
}

pub fn install_prompt_available() -> bool {
    interop::install_prompt_available()
}

pub async fn install_prompt_show() -> Result<String, String> {
    interop::install_prompt_show().await
}
