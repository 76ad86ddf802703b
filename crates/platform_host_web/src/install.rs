//! Install prompt adapter replaying the browser's deferred `beforeinstallprompt` event.

use platform_host::{InstallOutcome, InstallPrompt, InstallPromptFuture};

use crate::bridge;

/// Maps the browser's `userChoice.outcome` token.
pub fn parse_install_outcome(raw: &str) -> InstallOutcome {
    match raw {
        "accepted" => InstallOutcome::Accepted,
        "unavailable" => InstallOutcome::Unavailable,
        _ => InstallOutcome::Dismissed,
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser install prompt.
pub struct WebInstallPrompt;

impl WebInstallPrompt {
    /// Starts capturing the deferred install event; repeated calls are ignored.
    pub fn listen() -> Self {
        bridge::install_prompt_listen();
        Self
    }
}

impl InstallPrompt for WebInstallPrompt {
    fn is_available(&self) -> bool {
        bridge::install_prompt_available()
    }

    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async move {
            bridge::install_prompt_show()
                .await
                .map(|raw| parse_install_outcome(&raw))
        })
    }
}
