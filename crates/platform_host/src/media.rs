//! Thumbnail URL scaling.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use url::Url;

/// Extensions the thumbnail server needs to see to pick a decoder.
const KNOWN_MEDIA_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "mp4", "webm", "ogv", "mov",
];

/// Resolves a width/height-aware thumbnail URL for a source image.
pub trait ThumbnailScaler {
    /// Returns the URL to load for a `width`×`height` thumbnail of `url`.
    fn scale(&self, url: &str, width: u32, height: u32) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// Scaler that returns source URLs unchanged.
pub struct PassthroughThumbnailScaler;

impl ThumbnailScaler for PassthroughThumbnailScaler {
    fn scale(&self, url: &str, _width: u32, _height: u32) -> String {
        url.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Scaler backed by a thumbnail server host.
///
/// With no server configured every URL passes through unchanged.
pub struct ThumbnailServerScaler {
    server: Option<String>,
}

impl ThumbnailServerScaler {
    /// Creates a scaler for `server` (host name, optionally with port).
    pub fn new(server: Option<String>) -> Self {
        let server = server
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|raw| !raw.is_empty());
        Self { server }
    }
}

impl ThumbnailScaler for ThumbnailServerScaler {
    fn scale(&self, url: &str, width: u32, height: u32) -> String {
        let Some(server) = self.server.as_deref() else {
            return url.to_string();
        };
        if url.is_empty() {
            return String::new();
        }
        let encoded = URL_SAFE_NO_PAD.encode(url.as_bytes());
        let extension = known_extension(url)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        format!("https://{server}/thumbnail/{encoded}{extension}?w={width}&h={height}")
    }
}

fn known_extension(url: &str) -> Option<&'static str> {
    let url = Url::parse(url).ok()?;
    let file = url.path_segments()?.last()?;
    let (_, ext) = file.rsplit_once('.')?;
    KNOWN_MEDIA_EXTENSIONS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(ext))
        .copied()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn passes_through_without_server() {
        let scaler = ThumbnailServerScaler::new(None);
        assert_eq!(
            scaler.scale("https://cdn.example/a.png", 355, 200),
            "https://cdn.example/a.png"
        );

        let blank = ThumbnailServerScaler::new(Some("  ".to_string()));
        assert_eq!(blank, ThumbnailServerScaler::new(None));
    }

    #[test]
    fn encodes_source_and_keeps_known_extension() {
        let scaler = ThumbnailServerScaler::new(Some("thumbs.example/".to_string()));
        let source = "https://cdn.example/rooms/a.png?v=2";
        let encoded = URL_SAFE_NO_PAD.encode(source);

        assert_eq!(
            scaler.scale(source, 355, 200),
            format!("https://thumbs.example/thumbnail/{encoded}.png?w=355&h=200")
        );
        assert!(!encoded.contains('='));
    }

    #[test]
    fn drops_unknown_extension() {
        let scaler = ThumbnailServerScaler::new(Some("thumbs.example".to_string()));
        let source = "https://cdn.example/files/preview.bin";
        let encoded = URL_SAFE_NO_PAD.encode(source);

        assert_eq!(
            scaler.scale(source, 10, 20),
            format!("https://thumbs.example/thumbnail/{encoded}?w=10&h=20")
        );
    }

    #[test]
    fn host_dots_are_not_extensions() {
        assert_eq!(known_extension("https://cdn.example.png"), None);
        assert_eq!(known_extension("https://cdn.example/x.JPG"), Some("jpg"));
        assert_eq!(known_extension("https://cdn.example/clip.webm#t=3"), Some("webm"));
        assert_eq!(known_extension("https://cdn.example/dir.png/"), None);
        assert_eq!(known_extension("/relative/a.png"), None);
    }
}
