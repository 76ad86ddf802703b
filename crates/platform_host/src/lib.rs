//! Typed host-domain contracts and shared models used by the landing page and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes room records,
//! authentication and configuration snapshots, and service traits for room listings,
//! navigation, hub creation, thumbnails, and install prompts, while concrete browser adapters
//! live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;
pub mod host;
pub mod hubs;
pub mod install;
pub mod media;
pub mod navigation;
pub mod rooms;

pub use auth::AuthSession;
pub use config::{feature_enabled, translate_or, AppConfig, ConfigService};
pub use host::{HostServices, HostStrategy, MemoryHost};
pub use hubs::{
    CreatedHub, HubCreateRequest, HubLauncher, HubLauncherFuture, NoopHubLauncher,
    RecordingHubLauncher,
};
pub use install::{
    InstallOutcome, InstallPrompt, InstallPromptFuture, NoopInstallPrompt, StaticInstallPrompt,
};
pub use media::{PassthroughThumbnailScaler, ThumbnailScaler, ThumbnailServerScaler};
pub use navigation::{NavigationRecord, Navigator, NoopNavigator, RecordingNavigator};
pub use rooms::{
    MemoryRoomDirectory, NoopRoomDirectory, PreviewImage, RoomDirectory, RoomDirectoryFuture,
    RoomImages, RoomRecord, RoomSearchPage,
};
