//! Message ids and built-in English defaults for landing-page copy.

/// Product description shown in the hero while no rooms are featured.
pub const APP_DESCRIPTION: (&str, &str) = (
    "app-description",
    "Share a virtual room with friends. Watch videos, play with 3D objects, or just hang out.",
);

/// Document title.
pub const APP_NAME: (&str, &str) = ("app-name", "Hubs");

/// Create-room button label.
pub const CREATE_ROOM: (&str, &str) = ("create-room-button", "Create Room");

/// Install-app button label.
pub const INSTALL_APP: (&str, &str) = ("pwa-button", "Install App");

/// Room-code call-to-action label.
pub const HAVE_CODE: (&str, &str) = ("home-page.have-code", "Have a room code?");

pub(crate) const ROOMS_TITLE: (&str, &str) = ("home-page.rooms-title", "Instantly create rooms");
pub(crate) const ROOMS_BLURB: (&str, &str) = (
    "home-page.rooms-blurb",
    "Share virtual spaces with your friends, co-workers, and communities. When you create a room with Hubs, you’ll have a private virtual meeting space that you can instantly share - no downloads or VR headset necessary.",
);

pub(crate) const COMMUNICATE_TITLE: (&str, &str) =
    ("home-page.communicate-title", "Communicate naturally");
pub(crate) const COMMUNICATE_BLURB: (&str, &str) = (
    "home-page.communicate-blurb",
    "Choose an avatar to represent you, put on your headphones, and jump right in. Hubs makes it easy to stay connected with voice and text chat to other people in your private room.",
);

pub(crate) const MEDIA_TITLE: (&str, &str) =
    ("home-page.media-title", "An easier way to share media");
pub(crate) const MEDIA_BLURB: (&str, &str) = (
    "home-page.media-blurb",
    "Share content with others in your room by dragging and dropping photos, videos, PDF files, links, and 3D models into your space.",
);
