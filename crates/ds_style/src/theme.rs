//! Read-only prefix and style bundle threaded through every primitive.

use std::sync::Arc;

use crate::prefix::Prefix;
use crate::style_map::{StyleLookup, StyleMap, StyleSource};

#[derive(Debug, PartialEq, Eq)]
struct ThemeInner {
    prefix: Prefix,
    source: StyleSource,
}

/// Immutable design-system configuration passed explicitly to each render.
///
/// Clones share one allocation. There is no mutation API, so every primitive rendered with the
/// same theme observes the same prefix and style map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    inner: Arc<ThemeInner>,
}

impl Theme {
    /// Builds a theme from a prefix and a style source.
    pub fn new(prefix: Prefix, source: impl Into<StyleSource>) -> Self {
        Self {
            inner: Arc::new(ThemeInner {
                prefix,
                source: source.into(),
            }),
        }
    }

    /// Builds a theme whose tokens are emitted unchanged.
    pub fn passthrough(prefix: Prefix) -> Self {
        Self::new(prefix, StyleSource::Passthrough)
    }

    /// Builds a theme backed by a generated style map.
    pub fn with_style_map(prefix: Prefix, map: StyleMap) -> Self {
        Self::new(prefix, StyleSource::Map(map))
    }

    /// Returns the design-system prefix.
    pub fn prefix(&self) -> &Prefix {
        &self.inner.prefix
    }

    /// Returns the style source.
    pub fn styles(&self) -> &StyleSource {
        &self.inner.source
    }

    /// Resolves one logical token through the style source.
    pub fn lookup<'a>(&'a self, token: &'a str) -> Option<&'a str> {
        self.inner.source.lookup(token)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::passthrough(Prefix::default())
    }
}
