//! Shared UI primitive library for the landing site.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the site stylesheet. Pages should compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonSize, ButtonVariant, Card, Cluster, Container, Grid, Heading, HeadingLevel,
    Image, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkButton, PageContainer, Stack,
    Text, TextRole, TextTone,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Card, Cluster, Container, Grid, Heading, HeadingLevel,
        Image, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkButton, PageContainer,
        Stack, Text, TextRole, TextTone,
    };
}
