//! Explicit page-URL input for redirect decisions.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a page URL cannot be used as a redirect base.
pub enum LocationError {
    /// The URL is not absolute or is malformed.
    #[error("invalid page url {href}: {source}")]
    Invalid {
        /// Rejected input.
        href: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The URL has no host, as with `mailto:` or `data:` URLs.
    #[error("page url has no host: {0}")]
    MissingHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snapshot of the page URL taken once at mount.
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Parses an absolute URL such as `https://hubs.example/?sign_in=1#top`.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] for relative, malformed, or host-less URLs.
    pub fn parse(href: &str) -> Result<Self, LocationError> {
        let url = Url::parse(href.trim()).map_err(|source| LocationError::Invalid {
            href: href.to_string(),
            source,
        })?;
        if !url.has_host() {
            return Err(LocationError::MissingHost(href.to_string()));
        }
        Ok(Self { url })
    }

    /// `scheme://host[:port]`, without credentials or a trailing slash.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Path component, always starting with `/`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Query string including the leading `?`, or empty when there is no query.
    pub fn search(&self) -> String {
        match self.url.query() {
            Some(query) if !query.is_empty() => format!("?{query}"),
            _ => String::new(),
        }
    }

    /// Returns whether the query string carries `key`, with or without a value.
    ///
    /// Keys are form-urlencoded, so `a+b` and `a%20b` both match `"a b"`.
    pub fn has_query_param(&self, key: &str) -> bool {
        self.url.query_pairs().any(|(candidate, _)| candidate == key)
    }

    /// Absolute URL for `path` on this page's host, carrying the original query string.
    pub fn with_path_keeping_query(&self, path: &str) -> String {
        let mut target = self.url.clone();
        target.set_path(path);
        target.set_fragment(None);
        if self.search().is_empty() {
            target.set_query(None);
        }
        target.into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(href: &str) -> PageLocation {
        PageLocation::parse(href).expect("location")
    }

    #[test]
    fn parses_origin_path_and_query_without_fragment() {
        let location = page("https://hubs.example:8080/home?sign_in=1&x=2#top");
        assert_eq!(location.origin(), "https://hubs.example:8080");
        assert_eq!(location.path(), "/home");
        assert_eq!(location.search(), "?sign_in=1&x=2");
    }

    #[test]
    fn bare_origin_gets_root_path_and_empty_search() {
        let location = page("https://hubs.example?");
        assert_eq!(location.path(), "/");
        assert_eq!(location.search(), "");
        assert_eq!(
            location.with_path_keeping_query("/signin"),
            "https://hubs.example/signin"
        );
    }

    #[test]
    fn origin_excludes_credentials() {
        let location = page("https://user:pw@hubs.example/?sign_in");
        assert_eq!(location.origin(), "https://hubs.example");
    }

    #[test]
    fn rejects_relative_and_hostless_urls() {
        assert!(matches!(
            PageLocation::parse("/signin?x=1"),
            Err(LocationError::Invalid { .. })
        ));
        assert_eq!(
            PageLocation::parse("mailto:someone@hubs.example"),
            Err(LocationError::MissingHost(
                "mailto:someone@hubs.example".to_string()
            ))
        );
    }

    #[test]
    fn query_params_are_presence_only_and_decoded() {
        let location = page("https://hubs.example/?new&auth%5Ftopic=&a+b=1");
        assert!(location.has_query_param("new"));
        assert!(location.has_query_param("auth_topic"));
        assert!(location.has_query_param("a b"));
        assert!(!location.has_query_param("sign_in"));
    }

    #[test]
    fn second_question_mark_belongs_to_the_first_key() {
        let location = page("https://hubs.example/??sign_in=1");
        assert_eq!(location.search(), "??sign_in=1");
        assert!(!location.has_query_param("sign_in"));
        assert!(location.has_query_param("?sign_in"));

        let location = page("https://hubs.example/??a=1&sign_in");
        assert!(location.has_query_param("sign_in"));
        assert_eq!(
            location.with_path_keeping_query("/signin"),
            "https://hubs.example/signin??a=1&sign_in"
        );
    }

    #[test]
    fn keeps_query_and_drops_fragment_when_rebasing_path() {
        let location = page("https://hubs.example/rooms?auth_topic=xyz#later");
        assert_eq!(
            location.with_path_keeping_query("/verify"),
            "https://hubs.example/verify?auth_topic=xyz"
        );
    }

    #[test]
    fn malformed_percent_sequences_stay_literal() {
        let location = page("https://hubs.example/?100%&%zz");
        assert!(location.has_query_param("100%"));
        assert!(location.has_query_param("%zz"));
    }
}
