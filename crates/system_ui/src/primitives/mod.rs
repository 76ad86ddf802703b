//! Landing-page primitives and the `data-ui-*` tokens they emit.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod layout;

pub use controls::{Button, LinkButton};
pub use data_display::{Card, Heading, Image, Text};
pub use layout::{Cluster, Container, Grid, PageContainer, Stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Neutral action.
    Standard,
    /// The page's main call to action.
    Primary,
    /// Secondary call to action drawn in the accent color.
    Accent,
    /// Borderless action.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Default button.
    Md,
    /// Large button.
    Lg,
    /// Hero button.
    Xl,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typographic role of a text run.
pub enum TextRole {
    /// Paragraph copy.
    Body,
    /// Short label, such as a room name.
    Label,
    /// Secondary metadata, such as an occupancy count.
    Caption,
    /// Hero-sized copy.
    Title,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text color tone.
pub enum TextTone {
    /// Default foreground.
    Primary,
    /// Muted foreground.
    Secondary,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Document heading level.
pub enum HeadingLevel {
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spacing between children.
pub enum LayoutGap {
    /// Tight spacing.
    Sm,
    /// Default spacing.
    Md,
    /// Section spacing.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inner padding.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment.
pub enum LayoutAlign {
    /// Fill the cross axis.
    Stretch,
    /// Center on the cross axis.
    Center,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution.
pub enum LayoutJustify {
    /// Pack toward the start.
    Start,
    /// Center on the main axis.
    Center,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(
            merge_layout_class("ui-stack", Some("home-hero")),
            "ui-stack home-hero"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ButtonVariant::Accent.token(), "accent");
        assert_eq!(ButtonSize::Lg.token(), "lg");
        assert_eq!(LayoutGap::Lg.token(), "lg");
        assert_eq!(LayoutJustify::Center.token(), "center");
        assert_eq!(bool_token(true), "true");
    }
}
