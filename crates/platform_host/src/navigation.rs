//! Full-page navigation contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that leaves the current page.
pub trait Navigator {
    /// Navigates to `url`, keeping the current page in history.
    fn navigate(&self, url: &str) -> Result<(), String>;

    /// Navigates to `url`, replacing the current history entry.
    fn replace(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigator for unsupported targets.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }

    fn replace(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Navigation request captured by [`RecordingNavigator`].
pub enum NavigationRecord {
    /// [`Navigator::navigate`] call.
    Navigate(String),
    /// [`Navigator::replace`] call.
    Replace(String),
}

#[derive(Debug, Clone, Default)]
/// Navigator that records requests instead of leaving the page.
pub struct RecordingNavigator {
    inner: Rc<RefCell<Vec<NavigationRecord>>>,
}

impl RecordingNavigator {
    /// Returns recorded navigations in call order.
    pub fn records(&self) -> Vec<NavigationRecord> {
        self.inner.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .push(NavigationRecord::Navigate(url.to_string()));
        Ok(())
    }

    fn replace(&self, url: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .push(NavigationRecord::Replace(url.to_string()));
        Ok(())
    }
}
