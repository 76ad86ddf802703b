//! Navigation adapter backed by `window.location`.

use platform_host::Navigator;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigator using `location.assign` and `location.replace`.
pub struct WebNavigator;

impl Navigator for WebNavigator {
    fn navigate(&self, url: &str) -> Result<(), String> {
        bridge::location_assign(url)
    }

    fn replace(&self, url: &str) -> Result<(), String> {
        bridge::location_replace(url)
    }
}

/// Reads the current page URL.
///
/// # Errors
///
/// Returns an error outside the browser or when `location.href` is unreadable.
pub fn current_href() -> Result<String, String> {
    bridge::location_href()
}
