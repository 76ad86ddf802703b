use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn http_request(
    _method: &str,
    _url: &str,
    _authorization: Option<&str>,
    _json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    Err(unsupported())
}

pub fn location_href() -> Result<String, String> {
    Err(unsupported())
}

pub fn location_assign(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn location_replace(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn local_storage_get(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

pub fn local_storage_set(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

pub fn app_config_json() -> Result<Option<String>, String> {
    Ok(None)
}

pub fn install_prompt_listen() {}

pub fn install_prompt_available() -> bool {
    false
}

pub async fn install_prompt_show() -> Result<String, String> {
    Ok("unavailable".to_string())
}
