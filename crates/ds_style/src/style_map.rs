//! Token to scoped class-name lookups.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{StyleError, StyleResult};

/// Read-only lookup from a logical token to the class name emitted into markup.
///
/// Returning `None` means the token has no class; resolvers drop it without error.
pub trait StyleLookup {
    /// Resolves one logical token.
    fn lookup<'a>(&'a self, token: &'a str) -> Option<&'a str>;
}

/// Build-generated style map, typically the JSON emitted by a CSS-modules pipeline.
///
/// Entries are ordered by token so debug output and serialization are deterministic. Empty or
/// whitespace-only values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Builds a map from `(token, class)` pairs. Later pairs win for duplicate tokens.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::default();
        for (token, class) in pairs {
            map.insert(token.into(), class.into());
        }
        map
    }

    /// Parses a flat JSON object artifact such as `{"ds-button": "Button_ds-button__a1"}`.
    pub fn from_json_str(raw: &str) -> StyleResult<Self> {
        let entries: BTreeMap<String, String> =
            serde_json::from_str(raw).map_err(|err| StyleError::StyleMapParse(err.to_string()))?;
        Ok(Self::from_pairs(entries))
    }

    /// Merges `other` into `self`; entries from `other` replace existing tokens.
    pub fn merge(mut self, other: StyleMap) -> Self {
        for (token, class) in other.0 {
            self.insert(token, class);
        }
        self
    }

    /// Returns `true` when the token has a class.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    /// Number of tokens with a class.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, token: String, class: String) {
        let class = class.trim();
        if class.is_empty() {
            self.0.remove(&token);
        } else {
            self.0.insert(token, class.to_string());
        }
    }
}

impl StyleLookup for StyleMap {
    fn lookup<'a>(&'a self, token: &'a str) -> Option<&'a str> {
        self.0.get(token).map(String::as_str)
    }
}

/// Identity lookup for hosts that ship global, unscoped stylesheets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl StyleLookup for Passthrough {
    fn lookup<'a>(&'a self, token: &'a str) -> Option<&'a str> {
        Some(token)
    }
}

/// Concrete lookup carried by a [`Theme`](crate::Theme).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    /// Scoped class names from a generated style map.
    Map(StyleMap),
    /// Tokens are emitted unchanged.
    Passthrough,
}

impl Default for StyleSource {
    fn default() -> Self {
        Self::Passthrough
    }
}

impl StyleLookup for StyleSource {
    fn lookup<'a>(&'a self, token: &'a str) -> Option<&'a str> {
        match self {
            Self::Map(map) => map.lookup(token),
            Self::Passthrough => Some(token),
        }
    }
}

impl From<StyleMap> for StyleSource {
    fn from(map: StyleMap) -> Self {
        Self::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_modules_json_artifact() {
        let map = StyleMap::from_json_str(
            r#"{"ds-button": "Button_ds-button__a1", "ds-button--sm": "Button_ds-button--sm__b2"}"#,
        )
        .expect("style map");
        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup("ds-button"), Some("Button_ds-button__a1"));
        assert_eq!(map.lookup("ds-button--primary"), None);
    }

    #[test]
    fn rejects_non_string_values() {
        let err = StyleMap::from_json_str(r#"{"ds-button": 3}"#).expect_err("number value");
        assert!(matches!(err, StyleError::StyleMapParse(_)));
    }

    #[test]
    fn blank_values_are_not_stored() {
        let map = StyleMap::from_pairs([("ds-button", "a1"), ("ds-button--sm", "  ")]);
        assert!(map.contains("ds-button"));
        assert!(!map.contains("ds-button--sm"));
        assert_eq!(map.lookup("ds-button--sm"), None);
    }

    #[test]
    fn merge_prefers_later_artifacts() {
        let button = StyleMap::from_pairs([("ds-button", "a1"), ("ds-button-text", "t1")]);
        let typography = StyleMap::from_pairs([("ds-button-text", "t2"), ("ds-header--5", "h5")]);
        let merged = button.merge(typography);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.lookup("ds-button-text"), Some("t2"));
    }

    #[test]
    fn passthrough_returns_token_unchanged() {
        assert_eq!(StyleSource::Passthrough.lookup("ds-body--1"), Some("ds-body--1"));
    }
}
