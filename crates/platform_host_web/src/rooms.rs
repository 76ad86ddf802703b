//! Room directory adapter backed by the media search API.

use platform_host::{AuthSession, RoomDirectory, RoomDirectoryFuture, RoomRecord, RoomSearchPage};
use thiserror::Error;

use crate::bridge;

/// Public room search endpoint.
pub const PUBLIC_ROOMS_PATH: &str = "/api/v1/media/search?source=rooms&filter=public";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while listing rooms.
pub enum RoomFetchError {
    /// The request never produced a response.
    #[error("room search request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("room search returned HTTP {0}")]
    Status(u16),
    /// The response body was not a search page.
    #[error("room search response was malformed: {0}")]
    Decode(String),
}

/// Builds the favorites search path for `account_id`.
pub fn favorite_rooms_path(account_id: &str) -> String {
    format!("/api/v1/media/search?source=favorites&type=rooms&user={account_id}")
}

/// Decodes a search response into room entries.
///
/// # Errors
///
/// Returns [`RoomFetchError::Status`] for non-2xx responses and [`RoomFetchError::Decode`] when
/// the body is not a search page.
pub fn parse_room_search(response: &bridge::HttpResponse) -> Result<Vec<RoomRecord>, RoomFetchError> {
    if !response.is_success() {
        return Err(RoomFetchError::Status(response.status));
    }
    serde_json::from_str::<RoomSearchPage>(&response.body)
        .map(|page| page.entries)
        .map_err(|e| RoomFetchError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Default)]
/// Browser room directory calling the same-origin media search API.
pub struct WebRoomDirectory {
    auth: AuthSession,
}

impl WebRoomDirectory {
    /// Creates a directory that authenticates favorite lookups with `auth`.
    pub fn new(auth: AuthSession) -> Self {
        Self { auth }
    }

    async fn search(&self, path: &str) -> Result<Vec<RoomRecord>, RoomFetchError> {
        let authorization = self.auth.authorization_header();
        let response = bridge::get_json(path, authorization.as_deref())
            .await
            .map_err(RoomFetchError::Transport)?;
        parse_room_search(&response)
    }
}

impl RoomDirectory for WebRoomDirectory {
    fn favorite_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>> {
        Box::pin(async move {
            let Some(account_id) = self.auth.account_id.as_deref().filter(|_| self.auth.signed_in)
            else {
                return Ok(Vec::new());
            };
            self.search(&favorite_rooms_path(account_id))
                .await
                .map_err(|e| e.to_string())
        })
    }

    fn public_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>> {
        Box::pin(async move {
            self.search(PUBLIC_ROOMS_PATH)
                .await
                .map_err(|e| e.to_string())
        })
    }
}
