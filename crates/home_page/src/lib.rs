//! Hubs landing page.
//!
//! The page merges the signed-in user's favorite rooms with the public room listing into one
//! featured grid, shows onboarding panels while that grid is empty, and handles legacy
//! `?sign_in`, `?auth_topic`, and `?new` links once per mount. Everything environment-specific
//! arrives through [`platform_host::HostServices`].

pub mod components;
pub mod featured;
pub mod legacy_redirect;
pub mod location;
pub mod messages;
pub mod view_model;

pub use components::{use_home_view_model, HomePage};
pub use featured::featured_rooms;
pub use legacy_redirect::{
    plan_legacy_redirects, run_legacy_redirects, LegacyRedirectGuard, LegacyRedirectPlan,
};
pub use location::{LocationError, PageLocation};
pub use view_model::{can_create_rooms, FeaturePanel, FeaturePanelKind, HomeViewModel, RoomTile};
