//! Design-system namespace prefix.

use std::fmt;
use std::sync::Arc;

use crate::error::{StyleError, StyleResult};

/// Prefix used when no theme configuration supplies one.
pub const DEFAULT_PREFIX: &str = "ds";

/// Namespace string prepended to every logical class token.
///
/// The prefix is fixed once a [`Theme`](crate::Theme) is built; cloning shares the same
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(Arc<str>);

impl Prefix {
    /// Validates and wraps a prefix.
    ///
    /// The empty prefix is allowed. Whitespace is rejected because it would split a single token
    /// into several class names.
    pub fn parse(raw: impl AsRef<str>) -> StyleResult<Self> {
        let raw = raw.as_ref();
        if raw.chars().any(char::is_whitespace) {
            return Err(StyleError::InvalidPrefix(raw.to_string()));
        }
        Ok(Self(Arc::from(raw)))
    }

    /// Returns the prefix text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty prefix.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the base token `"{prefix}-{block}"`.
    ///
    /// With an empty prefix the token is the bare block name.
    pub fn token(&self, block: &str) -> String {
        if self.is_empty() {
            block.to_string()
        } else {
            format!("{}-{block}", self.0)
        }
    }

    /// Builds the modifier token `"{prefix}-{block}--{modifier}"`.
    pub fn modifier_token(&self, block: &str, modifier: &str) -> String {
        format!("{}--{modifier}", self.token(block))
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(Arc::from(DEFAULT_PREFIX))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
