//! Hub (room session) creation contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`HubLauncher`].
pub type HubLauncherFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Parameters for creating a new hub.
pub struct HubCreateRequest {
    /// Room name; the server generates one when absent.
    pub name: Option<String>,
    /// Room description.
    pub description: Option<String>,
    /// Replace the current history entry when redirecting into the new room.
    pub replace_location: bool,
}

impl HubCreateRequest {
    /// Unnamed hub with a forced redirect, as requested by legacy `?new` links.
    pub fn forced_unnamed() -> Self {
        Self {
            name: None,
            description: None,
            replace_location: true,
        }
    }

    /// Unnamed hub with a regular redirect, as requested by the create-room button.
    pub fn unnamed() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Server response for a created hub.
pub struct CreatedHub {
    /// Absolute room URL.
    pub url: String,
    /// Hub id.
    pub hub_id: String,
    /// Token proving the caller created the room.
    #[serde(default)]
    pub creator_assignment_token: Option<String>,
    /// Token allowing the room to be embedded.
    #[serde(default)]
    pub embed_token: Option<String>,
}

/// Host service that creates a hub and redirects the page into it.
pub trait HubLauncher {
    /// Creates a hub and navigates to it once the server answers.
    fn create_and_redirect<'a>(
        &'a self,
        request: HubCreateRequest,
    ) -> HubLauncherFuture<'a, Result<CreatedHub, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Launcher for targets that cannot create hubs.
pub struct NoopHubLauncher;

impl HubLauncher for NoopHubLauncher {
    fn create_and_redirect<'a>(
        &'a self,
        _request: HubCreateRequest,
    ) -> HubLauncherFuture<'a, Result<CreatedHub, String>> {
        Box::pin(async { Err("hub creation is unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Launcher that records requests and answers with a synthetic hub.
pub struct RecordingHubLauncher {
    inner: Rc<RefCell<Vec<HubCreateRequest>>>,
}

impl RecordingHubLauncher {
    /// Returns recorded requests in call order.
    pub fn requests(&self) -> Vec<HubCreateRequest> {
        self.inner.borrow().clone()
    }
}

impl HubLauncher for RecordingHubLauncher {
    fn create_and_redirect<'a>(
        &'a self,
        request: HubCreateRequest,
    ) -> HubLauncherFuture<'a, Result<CreatedHub, String>> {
        Box::pin(async move {
            let hub_id = format!("hub{}", self.inner.borrow().len() + 1);
            self.inner.borrow_mut().push(request);
            Ok(CreatedHub {
                url: format!("https://hubs.example/{hub_id}"),
                hub_id,
                creator_assignment_token: None,
                embed_token: None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_launcher_keeps_requests_in_order() {
        let launcher = RecordingHubLauncher::default();
        let launcher_obj: &dyn HubLauncher = &launcher;

        let first = block_on(launcher_obj.create_and_redirect(HubCreateRequest::forced_unnamed()))
            .expect("first hub");
        block_on(launcher_obj.create_and_redirect(HubCreateRequest::unnamed())).expect("second");

        assert_eq!(first.hub_id, "hub1");
        assert_eq!(
            launcher.requests(),
            vec![HubCreateRequest::forced_unnamed(), HubCreateRequest::unnamed()]
        );
    }

    #[test]
    fn noop_launcher_reports_unavailable() {
        let err = block_on(NoopHubLauncher.create_and_redirect(HubCreateRequest::unnamed()))
            .expect_err("noop launcher");
        assert!(err.contains("unavailable"));
    }
}
