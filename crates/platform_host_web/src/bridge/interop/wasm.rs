use js_sys::Promise;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
let deferredInstallPrompt = null;
let installListenerAttached = false;

export async function jsHttpRequest(method, url, authorization, body) {
  const headers = { 'Accept': 'application/json' };
  if (authorization) {
    headers['Authorization'] = authorization;
  }
  const init = { method, headers, credentials: 'same-origin' };
  if (body !== undefined && body !== null) {
    headers['Content-Type'] = 'application/json';
    init.body = body;
  }
  const response = await fetch(url, init);
  const text = await response.text();
  return { status: response.status, body: text };
}

export function jsAppConfigJson() {
  if (typeof window === 'undefined' || window.APP_CONFIG === undefined || window.APP_CONFIG === null) {
    return null;
  }
  return JSON.stringify(window.APP_CONFIG);
}

export function jsInstallPromptListen() {
  if (installListenerAttached || typeof window === 'undefined') {
    return;
  }
  installListenerAttached = true;
  window.addEventListener('beforeinstallprompt', (event) => {
    event.preventDefault();
    deferredInstallPrompt = event;
  });
  window.addEventListener('appinstalled', () => {
    deferredInstallPrompt = null;
  });
}

export function jsInstallPromptAvailable() {
  return deferredInstallPrompt !== null;
}

export async function jsInstallPromptShow() {
  if (!deferredInstallPrompt) {
    return 'unavailable';
  }
  const event = deferredInstallPrompt;
  deferredInstallPrompt = null;
  event.prompt();
  const choice = await event.userChoice;
  return choice && choice.outcome ? choice.outcome : 'dismissed';
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsHttpRequest)]
    fn js_http_request(
        method: &str,
        url: &str,
        authorization: Option<String>,
        body: Option<String>,
    ) -> Promise;
    #[wasm_bindgen(js_name = jsAppConfigJson)]
    fn js_app_config_json() -> Option<String>;
    #[wasm_bindgen(js_name = jsInstallPromptListen)]
    fn js_install_prompt_listen();
    #[wasm_bindgen(js_name = jsInstallPromptAvailable)]
    fn js_install_prompt_available() -> bool;
    #[wasm_bindgen(js_name = jsInstallPromptShow)]
    fn js_install_prompt_show() -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn location() -> Result<web_sys::Location, String> {
    web_sys::window()
        .map(|window| window.location())
        .ok_or_else(|| "window unavailable".to_string())
}

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub async fn http_request(
    method: &str,
    url: &str,
    authorization: Option<&str>,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    let value = await_promise(js_http_request(
        method,
        url,
        authorization.map(str::to_string),
        json_body.map(str::to_string),
    ))
    .await?;
    from_value(value).map_err(|e| e.to_string())
}

pub fn location_href() -> Result<String, String> {
    location()?.href().map_err(js_error_to_string)
}

pub fn location_assign(url: &str) -> Result<(), String> {
    location()?.assign(url).map_err(js_error_to_string)
}

pub fn location_replace(url: &str) -> Result<(), String> {
    location()?.replace(url).map_err(js_error_to_string)
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|e| format!("localStorage get_item failed: {e:?}"))
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| format!("localStorage set_item failed: {e:?}"))
}

pub fn app_config_json() -> Result<Option<String>, String> {
    Ok(js_app_config_json())
}

pub fn install_prompt_listen() {
    js_install_prompt_listen();
}

pub fn install_prompt_available() -> bool {
    js_install_prompt_available()
}

pub async fn install_prompt_show() -> Result<String, String> {
    let value = await_promise(js_install_prompt_show()).await?;
    value
        .as_string()
        .ok_or_else(|| "install prompt returned non-string outcome".to_string())
}
