//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for room listings, hub creation,
//! navigation, install prompts, and the page-load config and credential snapshots.
//!
//! All browser API access goes through the private `bridge` module, which pairs each wasm
//! binding with a non-wasm fallback so adapters stay testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and service bundle factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod hubs;
pub mod install;
pub mod navigation;
pub mod rooms;
pub mod session;

pub use adapters::{
    browser_host_services, build_host_services, host_strategy_name, selected_host_strategy,
};
pub use bridge::HttpResponse;
pub use hubs::{HubCreateError, WebHubLauncher};
pub use install::WebInstallPrompt;
pub use navigation::{current_href, WebNavigator};
pub use rooms::{RoomFetchError, WebRoomDirectory};
pub use session::{load_app_config, load_auth_session};
