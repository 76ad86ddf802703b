//! Authentication session snapshot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Read-only authentication state for the current page load.
pub struct AuthSession {
    /// Whether credentials are present.
    pub signed_in: bool,
    /// Whether the account holds admin rights.
    pub is_admin: bool,
    /// Bearer token for authenticated API calls.
    pub token: Option<String>,
    /// Account id used for per-account queries.
    pub account_id: Option<String>,
}

impl AuthSession {
    /// Anonymous visitor session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Signed-in session carrying `token`.
    pub fn signed_in(token: impl Into<String>, account_id: Option<String>, is_admin: bool) -> Self {
        Self {
            signed_in: true,
            is_admin,
            token: Some(token.into()),
            account_id,
        }
    }

    /// Returns the `Authorization` header value when a token is present.
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("bearer {token}"))
    }
}
