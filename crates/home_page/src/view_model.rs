//! Render decisions for the landing page, computed from featured rooms, auth, and config.

use platform_host::{translate_or, AuthSession, ConfigService, RoomRecord, ThumbnailScaler};

use crate::messages;

/// Feature flag hiding the create-room button from non-admins.
pub const DISABLE_ROOM_CREATION_FLAG: &str = "disable_room_creation";
/// Feature flag enabling the empty-state feature panels.
pub const SHOW_FEATURE_PANELS_FLAG: &str = "show_feature_panels";
/// Image slot of the hero artwork.
pub const HERO_IMAGE_KEY: &str = "home_background";
/// Room-code entry page.
pub const HAVE_CODE_HREF: &str = "/link";

/// Thumbnail width requested for room tiles.
pub const ROOM_TILE_THUMBNAIL_WIDTH: u32 = 355;
/// Thumbnail height requested for room tiles.
pub const ROOM_TILE_THUMBNAIL_HEIGHT: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static informational panels shown on an empty landing page.
pub enum FeaturePanelKind {
    /// Instant room creation.
    Rooms,
    /// Voice and text communication.
    Communicate,
    /// Media sharing.
    Media,
}

impl FeaturePanelKind {
    /// Panels in display order.
    pub const ALL: [Self; 3] = [Self::Rooms, Self::Communicate, Self::Media];

    /// Image slot name.
    pub const fn image_key(self) -> &'static str {
        match self {
            Self::Rooms => "landing_rooms_thumb",
            Self::Communicate => "landing_communicate_thumb",
            Self::Media => "landing_media_thumb",
        }
    }

    const fn title(self) -> (&'static str, &'static str) {
        match self {
            Self::Rooms => messages::ROOMS_TITLE,
            Self::Communicate => messages::COMMUNICATE_TITLE,
            Self::Media => messages::MEDIA_TITLE,
        }
    }

    const fn body(self) -> (&'static str, &'static str) {
        match self {
            Self::Rooms => messages::ROOMS_BLURB,
            Self::Communicate => messages::COMMUNICATE_BLURB,
            Self::Media => messages::MEDIA_BLURB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved content of one feature panel.
pub struct FeaturePanel {
    /// Which panel this is.
    pub kind: FeaturePanelKind,
    /// Configured artwork, if any.
    pub image_url: Option<String>,
    /// Localized title.
    pub title: String,
    /// Localized body.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved content of one room tile.
pub struct RoomTile {
    /// Room id, used as the render key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room URL.
    pub url: String,
    /// Scaled thumbnail URL.
    pub thumbnail_url: String,
    /// Members currently present.
    pub member_count: u32,
    /// Capacity, when configured.
    pub room_size: Option<u32>,
}

impl RoomTile {
    /// Occupancy label such as `3` or `3/24`.
    pub fn occupancy_label(&self) -> String {
        match self.room_size {
            Some(size) => format!("{}/{}", self.member_count, size),
            None => self.member_count.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the landing page renders for one state of its inputs.
pub struct HomeViewModel {
    /// Product description; present only while no rooms are featured.
    pub app_description: Option<String>,
    /// Whether the create-room button is rendered.
    pub can_create_rooms: bool,
    /// Create-room button label.
    pub create_room_label: String,
    /// Install-app button label. The button itself is always rendered.
    pub install_app_label: String,
    /// Hero artwork URL.
    pub hero_image_url: Option<String>,
    /// Feature panels; empty unless no rooms are featured and the flag is on.
    pub feature_panels: Vec<FeaturePanel>,
    /// Room grid tiles in featured order.
    pub room_tiles: Vec<RoomTile>,
    /// Room-code call-to-action label.
    pub have_code_label: String,
}

/// Room creation is open unless disabled by config; admins can always create rooms.
pub fn can_create_rooms(auth: &AuthSession, config: &dyn ConfigService) -> bool {
    !config.feature(DISABLE_ROOM_CREATION_FLAG) || auth.is_admin
}

fn message(config: &dyn ConfigService, (id, default_message): (&str, &str)) -> String {
    translate_or(config, id, default_message)
}

impl HomeViewModel {
    /// Builds the view model for `featured` rooms.
    pub fn build(
        featured: &[RoomRecord],
        auth: &AuthSession,
        config: &dyn ConfigService,
        thumbnails: &dyn ThumbnailScaler,
    ) -> Self {
        let empty = featured.is_empty();

        let feature_panels = if empty && config.feature(SHOW_FEATURE_PANELS_FLAG) {
            FeaturePanelKind::ALL
                .into_iter()
                .map(|kind| FeaturePanel {
                    kind,
                    image_url: config.image(kind.image_key()),
                    title: message(config, kind.title()),
                    body: message(config, kind.body()),
                })
                .collect()
        } else {
            Vec::new()
        };

        let room_tiles = featured
            .iter()
            .map(|room| RoomTile {
                id: room.id.clone(),
                name: room.name.clone(),
                url: room.url.clone(),
                thumbnail_url: thumbnails.scale(
                    room.preview_url(),
                    ROOM_TILE_THUMBNAIL_WIDTH,
                    ROOM_TILE_THUMBNAIL_HEIGHT,
                ),
                member_count: room.member_count,
                room_size: room.room_size,
            })
            .collect();

        Self {
            app_description: empty.then(|| message(config, messages::APP_DESCRIPTION)),
            can_create_rooms: can_create_rooms(auth, config),
            create_room_label: message(config, messages::CREATE_ROOM),
            install_app_label: message(config, messages::INSTALL_APP),
            hero_image_url: config.image(HERO_IMAGE_KEY),
            feature_panels,
            room_tiles,
            have_code_label: message(config, messages::HAVE_CODE),
        }
    }

    /// Whether the empty-state description is shown.
    pub fn show_description(&self) -> bool {
        self.app_description.is_some()
    }

    /// Whether the feature panel row is shown.
    pub fn show_feature_panels(&self) -> bool {
        !self.feature_panels.is_empty()
    }

    /// Whether the room grid is shown.
    pub fn show_room_grid(&self) -> bool {
        !self.room_tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{AppConfig, PassthroughThumbnailScaler, ThumbnailServerScaler};
    use pretty_assertions::assert_eq;

    use super::*;

    fn build(featured: &[RoomRecord], auth: &AuthSession, config: &AppConfig) -> HomeViewModel {
        HomeViewModel::build(featured, auth, config, &PassthroughThumbnailScaler)
    }

    fn rooms() -> Vec<RoomRecord> {
        let mut room = RoomRecord::new("r1", 4, "https://cdn.example/r1.png");
        room.name = "Atrium".to_string();
        room.url = "https://hubs.example/r1/atrium".to_string();
        room.room_size = Some(24);
        vec![room]
    }

    #[test]
    fn empty_state_shows_description_and_panels_when_flagged() {
        let config = AppConfig::default()
            .with_feature(SHOW_FEATURE_PANELS_FLAG, true)
            .with_image("landing_media_thumb", "https://cdn.example/media.png");
        let view = build(&[], &AuthSession::anonymous(), &config);

        assert!(view.show_description());
        assert!(!view.show_room_grid());
        assert_eq!(
            view.feature_panels
                .iter()
                .map(|panel| panel.kind)
                .collect::<Vec<_>>(),
            FeaturePanelKind::ALL.to_vec()
        );
        assert_eq!(view.feature_panels[0].title, "Instantly create rooms");
        assert_eq!(view.feature_panels[0].image_url, None);
        assert_eq!(
            view.feature_panels[2].image_url.as_deref(),
            Some("https://cdn.example/media.png")
        );
    }

    #[test]
    fn empty_state_without_flag_has_no_panels() {
        let view = build(&[], &AuthSession::anonymous(), &AppConfig::default());
        assert!(view.show_description());
        assert!(!view.show_feature_panels());
    }

    #[test]
    fn featured_rooms_replace_description_and_panels() {
        let config = AppConfig::default().with_feature(SHOW_FEATURE_PANELS_FLAG, true);
        let view = build(&rooms(), &AuthSession::anonymous(), &config);

        assert!(!view.show_description());
        assert!(!view.show_feature_panels());
        assert_eq!(
            view.room_tiles,
            vec![RoomTile {
                id: "r1".to_string(),
                name: "Atrium".to_string(),
                url: "https://hubs.example/r1/atrium".to_string(),
                thumbnail_url: "https://cdn.example/r1.png".to_string(),
                member_count: 4,
                room_size: Some(24),
            }]
        );
        assert_eq!(view.room_tiles[0].occupancy_label(), "4/24");
    }

    #[test]
    fn room_creation_gate_respects_flag_and_admin() {
        let disabled = AppConfig::default().with_feature(DISABLE_ROOM_CREATION_FLAG, true);
        let admin = AuthSession::signed_in("t", None, true);
        let member = AuthSession::signed_in("t", None, false);

        assert!(can_create_rooms(&AuthSession::anonymous(), &AppConfig::default()));
        assert!(!can_create_rooms(&member, &disabled));
        assert!(!can_create_rooms(&AuthSession::anonymous(), &disabled));
        assert!(can_create_rooms(&admin, &disabled));
        assert!(!build(&[], &member, &disabled).can_create_rooms);
    }

    #[test]
    fn tiles_request_scaled_thumbnails() {
        let scaler = ThumbnailServerScaler::new(Some("thumbs.example".to_string()));
        let view = HomeViewModel::build(
            &rooms(),
            &AuthSession::anonymous(),
            &AppConfig::default(),
            &scaler,
        );
        assert_eq!(
            view.room_tiles[0].thumbnail_url,
            scaler.scale("https://cdn.example/r1.png", 355, 200)
        );
        assert!(view.room_tiles[0].thumbnail_url.ends_with("?w=355&h=200"));
    }

    #[test]
    fn configured_copy_overrides_defaults() {
        let config = AppConfig::default()
            .with_translation("app-description", "Meet up in 3D")
            .with_translation("home-page.have-code", "Got a code?")
            .with_image(HERO_IMAGE_KEY, "https://cdn.example/hero.jpg");
        let view = build(&[], &AuthSession::anonymous(), &config);

        assert_eq!(view.app_description.as_deref(), Some("Meet up in 3D"));
        assert_eq!(view.have_code_label, "Got a code?");
        assert_eq!(view.create_room_label, "Create Room");
        assert_eq!(
            view.hero_image_url.as_deref(),
            Some("https://cdn.example/hero.jpg")
        );
    }
}
