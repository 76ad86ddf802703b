//! Hub creation adapter backed by the hubs API.

use std::rc::Rc;

use platform_host::{
    AuthSession, CreatedHub, HubCreateRequest, HubLauncher, HubLauncherFuture, Navigator,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::bridge;

/// Hub creation endpoint.
pub const HUBS_PATH: &str = "/api/v1/hubs";

/// `localStorage` key prefix for creator assignment tokens.
pub const CREATOR_TOKEN_KEY_PREFIX: &str = "hub_creator_token:";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while creating a hub.
pub enum HubCreateError {
    /// The request never produced a response.
    #[error("hub creation request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("hub creation returned HTTP {0}")]
    Status(u16),
    /// The response body was not a created hub.
    #[error("hub creation response was malformed: {0}")]
    Decode(String),
    /// The hub exists but the redirect failed.
    #[error("redirect to new hub failed: {0}")]
    Redirect(String),
}

/// Builds the JSON request body for `request`.
pub fn hub_create_body(request: &HubCreateRequest) -> Value {
    let mut hub = Map::new();
    if let Some(name) = request.name.as_ref() {
        hub.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(description) = request.description.as_ref() {
        hub.insert("description".to_string(), Value::String(description.clone()));
    }
    json!({ "hub": hub })
}

/// Decodes the create-hub response.
///
/// # Errors
///
/// Returns [`HubCreateError::Status`] for non-2xx responses and [`HubCreateError::Decode`] for
/// unexpected bodies.
pub fn parse_created_hub(response: &bridge::HttpResponse) -> Result<CreatedHub, HubCreateError> {
    if !response.is_success() {
        return Err(HubCreateError::Status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| HubCreateError::Decode(e.to_string()))
}

#[derive(Clone)]
/// Browser hub launcher: POSTs the hub, stores the creator token, then redirects.
pub struct WebHubLauncher {
    auth: AuthSession,
    navigator: Rc<dyn Navigator>,
}

impl WebHubLauncher {
    /// Creates a launcher that redirects through `navigator`.
    pub fn new(auth: AuthSession, navigator: Rc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }

    async fn create(&self, request: HubCreateRequest) -> Result<CreatedHub, HubCreateError> {
        let body = hub_create_body(&request).to_string();
        let authorization = self.auth.authorization_header();
        let response = bridge::post_json(HUBS_PATH, authorization.as_deref(), &body)
            .await
            .map_err(HubCreateError::Transport)?;
        let hub = parse_created_hub(&response)?;

        if let Some(token) = hub.creator_assignment_token.as_deref() {
            let key = format!("{CREATOR_TOKEN_KEY_PREFIX}{}", hub.hub_id);
            if let Err(err) = bridge::local_storage_set(&key, token) {
                leptos::logging::warn!("storing creator token for hub {} failed: {err}", hub.hub_id);
            }
        }

        let redirect = if request.replace_location {
            self.navigator.replace(&hub.url)
        } else {
            self.navigator.navigate(&hub.url)
        };
        redirect.map_err(HubCreateError::Redirect)?;
        Ok(hub)
    }
}

impl HubLauncher for WebHubLauncher {
    fn create_and_redirect<'a>(
        &'a self,
        request: HubCreateRequest,
    ) -> HubLauncherFuture<'a, Result<CreatedHub, String>> {
        Box::pin(async move { self.create(request).await.map_err(|e| e.to_string()) })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unnamed_request_sends_empty_hub_object() {
        assert_eq!(
            hub_create_body(&HubCreateRequest::forced_unnamed()),
            json!({ "hub": {} })
        );
        let named = HubCreateRequest {
            name: Some("Atrium".to_string()),
            description: Some("Weekly".to_string()),
            replace_location: false,
        };
        assert_eq!(
            hub_create_body(&named),
            json!({ "hub": { "name": "Atrium", "description": "Weekly" } })
        );
    }

    #[test]
    fn parses_created_hub_and_rejects_errors() {
        let created = parse_created_hub(&bridge::HttpResponse {
            status: 200,
            body: r#"{"url":"https://hubs.example/abc/x","hub_id":"abc","creator_assignment_token":"ct"}"#
                .to_string(),
        })
        .expect("created hub");
        assert_eq!(created.hub_id, "abc");
        assert_eq!(created.creator_assignment_token.as_deref(), Some("ct"));
        assert_eq!(created.embed_token, None);

        assert_eq!(
            parse_created_hub(&bridge::HttpResponse {
                status: 429,
                body: String::new(),
            }),
            Err(HubCreateError::Status(429))
        );
    }
}
