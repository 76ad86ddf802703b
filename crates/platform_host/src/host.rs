//! Shared host-bundle model for browser and stub compositions.

use std::rc::Rc;

use crate::{
    AppConfig, AuthSession, ConfigService, HubLauncher, InstallPrompt, MemoryRoomDirectory,
    Navigator, NoopHubLauncher, NoopInstallPrompt, NoopNavigator, NoopRoomDirectory,
    PassthroughThumbnailScaler, RecordingHubLauncher, RecordingNavigator, RoomDirectory,
    StaticInstallPrompt, ThumbnailScaler,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// Placeholder composition with no-op adapters.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected service bundle injected into the landing page.
///
/// All environment-specific selection happens before this bundle reaches `home_page`, which
/// keeps page logic decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Favorite and public room listings.
    pub rooms: Rc<dyn RoomDirectory>,
    /// Authentication snapshot for this page load.
    pub auth: AuthSession,
    /// Feature flags, translations, and images.
    pub config: Rc<dyn ConfigService>,
    /// Thumbnail URL scaling.
    pub thumbnails: Rc<dyn ThumbnailScaler>,
    /// Full-page navigation.
    pub navigator: Rc<dyn Navigator>,
    /// Hub creation with redirect.
    pub hubs: Rc<dyn HubLauncher>,
    /// Installable-app prompt.
    pub install: Rc<dyn InstallPrompt>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters with default configuration.
    pub fn stub() -> Self {
        Self {
            rooms: Rc::new(NoopRoomDirectory),
            auth: AuthSession::anonymous(),
            config: Rc::new(AppConfig::default()),
            thumbnails: Rc::new(PassthroughThumbnailScaler),
            navigator: Rc::new(NoopNavigator),
            hubs: Rc::new(NoopHubLauncher),
            install: Rc::new(NoopInstallPrompt),
            host_strategy: HostStrategy::Stub,
        }
    }
}

/// In-memory host bundle whose adapters can be inspected after the fact.
#[derive(Clone, Default)]
pub struct MemoryHost {
    /// Room listings served to the page.
    pub rooms: MemoryRoomDirectory,
    /// Recorded navigations.
    pub navigator: RecordingNavigator,
    /// Recorded hub creations.
    pub hubs: RecordingHubLauncher,
    /// Install prompt fixture.
    pub install: StaticInstallPrompt,
}

impl MemoryHost {
    /// Builds a [`HostServices`] bundle over these adapters.
    pub fn services(&self, auth: AuthSession, config: AppConfig) -> HostServices {
        HostServices {
            rooms: Rc::new(self.rooms.clone()),
            auth,
            config: Rc::new(config),
            thumbnails: Rc::new(PassthroughThumbnailScaler),
            navigator: Rc::new(self.navigator.clone()),
            hubs: Rc::new(self.hubs.clone()),
            install: Rc::new(self.install.clone()),
            host_strategy: HostStrategy::Stub,
        }
    }
}
