//! Installable-app prompt contracts.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`InstallPrompt`].
pub type InstallPromptFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// User answer to an install prompt.
pub enum InstallOutcome {
    /// The app was installed.
    Accepted,
    /// The user declined.
    Dismissed,
    /// No deferred prompt was available, so nothing was shown.
    Unavailable,
}

/// Host service exposing the platform's add-to-home-screen flow.
pub trait InstallPrompt {
    /// Returns whether the platform currently offers an install prompt.
    fn is_available(&self) -> bool;

    /// Shows the install prompt.
    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Install prompt for targets without one.
pub struct NoopInstallPrompt;

impl InstallPrompt for NoopInstallPrompt {
    fn is_available(&self) -> bool {
        false
    }

    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async { Ok(InstallOutcome::Unavailable) })
    }
}

#[derive(Debug, Clone, Default)]
/// Install prompt that always answers with a fixed outcome and counts prompts.
pub struct StaticInstallPrompt {
    outcome: Option<InstallOutcome>,
    prompts: Rc<Cell<usize>>,
}

impl StaticInstallPrompt {
    /// Creates a prompt answering with `outcome`; `None` means unavailable.
    pub fn new(outcome: Option<InstallOutcome>) -> Self {
        Self {
            outcome,
            prompts: Rc::new(Cell::new(0)),
        }
    }

    /// Number of prompts shown so far.
    pub fn prompt_count(&self) -> usize {
        self.prompts.get()
    }
}

impl InstallPrompt for StaticInstallPrompt {
    fn is_available(&self) -> bool {
        self.outcome.is_some()
    }

    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async move {
            match self.outcome {
                Some(outcome) => {
                    self.prompts.set(self.prompts.get() + 1);
                    Ok(outcome)
                }
                None => Ok(InstallOutcome::Unavailable),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn static_prompt_counts_only_shown_prompts() {
        let prompt = StaticInstallPrompt::new(Some(InstallOutcome::Accepted));
        assert!(prompt.is_available());
        assert_eq!(block_on(prompt.prompt()), Ok(InstallOutcome::Accepted));
        assert_eq!(prompt.prompt_count(), 1);

        let unavailable = StaticInstallPrompt::new(None);
        assert_eq!(
            block_on(unavailable.prompt()),
            Ok(InstallOutcome::Unavailable)
        );
        assert_eq!(unavailable.prompt_count(), 0);
    }
}
