//! Room records and room-directory service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`RoomDirectory`] async methods.
pub type RoomDirectoryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Preview image attached to a room entry.
pub struct PreviewImage {
    /// Absolute URL of the unscaled preview image.
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Image set attached to a room entry.
pub struct RoomImages {
    /// Preview image used for room tiles.
    #[serde(default)]
    pub preview: PreviewImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Room entry as returned by the media search API.
pub struct RoomRecord {
    /// Stable room identity.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Optional room description.
    #[serde(default)]
    pub description: Option<String>,
    /// Absolute URL that enters the room.
    #[serde(default)]
    pub url: String,
    /// Number of members currently in the room.
    #[serde(default)]
    pub member_count: u32,
    /// Number of visitors waiting in the lobby.
    #[serde(default)]
    pub lobby_count: u32,
    /// Configured member capacity, when the room has one.
    #[serde(default)]
    pub room_size: Option<u32>,
    /// Room images.
    #[serde(default)]
    pub images: RoomImages,
}

impl RoomRecord {
    /// Builds a minimal record with an id, member count, and preview URL.
    pub fn new(id: impl Into<String>, member_count: u32, preview_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_count,
            images: RoomImages {
                preview: PreviewImage {
                    url: preview_url.into(),
                },
            },
            ..Self::default()
        }
    }

    /// Returns the unscaled preview image URL.
    pub fn preview_url(&self) -> &str {
        &self.images.preview.url
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Search response envelope wrapping room entries.
pub struct RoomSearchPage {
    /// Room entries in server order.
    #[serde(default)]
    pub entries: Vec<RoomRecord>,
}

/// Host service that lists rooms for the landing page.
pub trait RoomDirectory {
    /// Lists rooms the signed-in account marked as favorite. Signed-out sessions return an empty
    /// list.
    fn favorite_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>>;

    /// Lists rooms that are currently public.
    fn public_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op room directory that always reports empty lists.
pub struct NoopRoomDirectory;

impl RoomDirectory for NoopRoomDirectory {
    fn favorite_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn public_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory room directory with replaceable favorite and public lists.
pub struct MemoryRoomDirectory {
    favorites: Rc<RefCell<Vec<RoomRecord>>>,
    public: Rc<RefCell<Vec<RoomRecord>>>,
    failure: Rc<RefCell<Option<String>>>,
}

impl MemoryRoomDirectory {
    /// Creates a directory seeded with both lists.
    pub fn new(favorites: Vec<RoomRecord>, public: Vec<RoomRecord>) -> Self {
        Self {
            favorites: Rc::new(RefCell::new(favorites)),
            public: Rc::new(RefCell::new(public)),
            failure: Rc::default(),
        }
    }

    /// Replaces the favorite list.
    pub fn set_favorites(&self, rooms: Vec<RoomRecord>) {
        *self.favorites.borrow_mut() = rooms;
    }

    /// Replaces the public list.
    pub fn set_public(&self, rooms: Vec<RoomRecord>) {
        *self.public.borrow_mut() = rooms;
    }

    /// Makes both listings fail with `message` until cleared with `None`.
    pub fn set_failure(&self, message: Option<String>) {
        *self.failure.borrow_mut() = message;
    }

    fn listing(&self, rooms: &RefCell<Vec<RoomRecord>>) -> Result<Vec<RoomRecord>, String> {
        match self.failure.borrow().as_ref() {
            Some(message) => Err(message.clone()),
            None => Ok(rooms.borrow().clone()),
        }
    }
}

impl RoomDirectory for MemoryRoomDirectory {
    fn favorite_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>> {
        Box::pin(async move { self.listing(&self.favorites) })
    }

    fn public_rooms<'a>(&'a self) -> RoomDirectoryFuture<'a, Result<Vec<RoomRecord>, String>> {
        Box::pin(async move { self.listing(&self.public) })
    }
}
