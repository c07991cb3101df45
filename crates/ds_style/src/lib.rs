//! Runtime-agnostic class-name contract for the prefixed design-system primitives.
//!
//! This crate owns the pieces every primitive shares: the design-system [`Prefix`], the
//! build-generated [`StyleMap`] that turns logical tokens into scoped class names, the
//! [`Theme`] bundle that carries both, and the class-name resolver that composes a root
//! element's `class` attribute from its variant flags.
//!
//! Nothing here depends on Leptos or browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod prefix;
mod resolver;
mod style_map;
mod theme;

pub use config::{ThemeConfig, ThemeLoader};
pub use error::{StyleError, StyleResult};
pub use prefix::{Prefix, DEFAULT_PREFIX};
pub use resolver::{resolve_class_names, BlockName, ClassList, ClassRecipe, VariantRule};
pub use style_map::{Passthrough, StyleLookup, StyleMap, StyleSource};
pub use theme::Theme;
