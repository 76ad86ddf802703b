use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, Navigator, ThumbnailServerScaler};

use crate::{
    load_app_config, load_auth_session, WebHubLauncher, WebInstallPrompt, WebNavigator,
    WebRoomDirectory,
};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the browser service bundle from the page's injected config and stored credentials.
pub fn browser_host_services() -> HostServices {
    let config = load_app_config();
    let auth = load_auth_session(&config);
    let navigator: Rc<dyn Navigator> = Rc::new(WebNavigator);

    HostServices {
        rooms: Rc::new(WebRoomDirectory::new(auth.clone())),
        thumbnails: Rc::new(ThumbnailServerScaler::new(config.thumbnail_server.clone())),
        hubs: Rc::new(WebHubLauncher::new(auth.clone(), navigator.clone())),
        install: Rc::new(WebInstallPrompt::listen()),
        navigator,
        auth,
        config: Rc::new(config),
        host_strategy: HostStrategy::Browser,
    }
}

/// Builds the service bundle for the compile-time selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => browser_host_services(),
        HostStrategy::Stub => HostServices::stub(),
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{ConfigService, InstallPrompt, ThumbnailScaler};

    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_browser_strategy() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_bundle_outside_browser_is_anonymous_and_unconfigured() {
        let services = browser_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Browser);
        assert!(!services.auth.signed_in);
        assert!(!services.config.feature("show_feature_panels"));
        assert!(!services.install.is_available());
        assert_eq!(
            services.thumbnails.scale("https://cdn.example/a.png", 355, 200),
            "https://cdn.example/a.png"
        );
    }
}
