//! Prefixed design-system primitives for Leptos applications.
//!
//! Every primitive takes an explicit [`Theme`] and composes its root `class` attribute through
//! the shared resolver in [`ds_style`]: the caller's override class first, then the resolved
//! `{prefix}-{block}` token, then one resolved `{prefix}-{block}--{modifier}` token per active
//! variant in the primitive's fixed order.
//!
//! Enable the `ssr` feature to server-render the primitives with `leptos::ssr`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod theme;

pub use ds_style::{ClassList, Prefix, StyleMap, Theme, ThemeConfig};
pub use primitives::{
    button_classes, Body, Body1, Body2, BodyLevel, Button, ButtonFlags, ButtonKind, ButtonRoot,
    ButtonText, ButtonType, Caption, Header1, Header2, Header3, Header4, Header5, Header6,
    Heading, HeadingLevel, LinkButton, NativeButton, TextStyle,
};
pub use theme::load_embedded_theme;

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        load_embedded_theme, Body, Body1, Body2, BodyLevel, Button, ButtonKind, ButtonText,
        ButtonType, Caption, Header1, Header2, Header3, Header4, Header5, Header6, Heading,
        HeadingLevel, Theme,
    };
}
