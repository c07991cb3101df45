//! Class-name composition from a block identifier and ordered variant rules.
//!
//! A primitive describes its root classes as a [`ClassRecipe`]: a [`BlockName`], an optional
//! caller override, and a fixed, component-defined list of [`VariantRule`]s. Resolution builds
//! `"{prefix}-{block}"` plus `"{prefix}-{block}--{modifier}"` for every applying rule, maps each
//! token through the theme's style lookup, and joins the result behind the override. Tokens
//! without a style entry are dropped; only exact duplicates are removed.

use std::borrow::Cow;
use std::fmt;

use crate::error::{StyleError, StyleResult};
use crate::prefix::Prefix;
use crate::style_map::StyleLookup;
use crate::theme::Theme;

/// Non-empty, whitespace-free element identifier such as `button` or `header`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockName(Cow<'static, str>);

impl BlockName {
    /// Wraps a static identifier.
    ///
    /// Used in a `const` item this rejects empty or whitespace identifiers at compile time.
    ///
    /// # Panics
    ///
    /// Panics when `name` is empty or contains ASCII whitespace.
    pub const fn new(name: &'static str) -> Self {
        assert!(!name.is_empty(), "block identifier must not be empty");
        let bytes = name.as_bytes();
        let mut index = 0;
        while index < bytes.len() {
            assert!(
                !bytes[index].is_ascii_whitespace(),
                "block identifier must not contain whitespace"
            );
            index += 1;
        }
        Self(Cow::Borrowed(name))
    }

    /// Validates a runtime identifier.
    pub fn parse(raw: impl Into<String>) -> StyleResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(StyleError::EmptyIdentifier);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(StyleError::InvalidIdentifier(raw));
        }
        Ok(Self(Cow::Owned(raw)))
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `(modifier, applies)` pair in a component's fixed check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRule {
    /// Token suffix appended after `--`.
    pub modifier: Cow<'static, str>,
    /// Whether the modifier token is emitted for this render.
    pub applies: bool,
}

impl VariantRule {
    /// Creates a rule.
    pub fn new(modifier: impl Into<Cow<'static, str>>, applies: bool) -> Self {
        Self {
            modifier: modifier.into(),
            applies,
        }
    }
}

/// Ordered, de-duplicated class names ready for a `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
    missing: Vec<String>,
}

impl ClassList {
    fn push(&mut self, class: &str) {
        if !self.classes.iter().any(|existing| existing == class) {
            self.classes.push(class.to_string());
        }
    }

    /// Returns the space-joined class attribute value.
    pub fn as_string(&self) -> String {
        self.classes.join(" ")
    }

    /// Iterates class names in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns `true` when no class survived resolution.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns `true` when `class` is part of the list.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Logical tokens that were dropped because the style lookup had no entry.
    pub fn missing_tokens(&self) -> &[String] {
        &self.missing
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.as_string()
    }
}

/// Resolves a root element's classes.
///
/// The override is trimmed, split on whitespace, and emitted first without lookup. The base token
/// follows, then each applying rule in slice order. Caller-side flag order never matters because
/// `variants` is the component's own declaration order.
pub fn resolve_class_names(
    prefix: &Prefix,
    lookup: &impl StyleLookup,
    block: &BlockName,
    variants: &[VariantRule],
    override_class: Option<&str>,
) -> ClassList {
    let mut list = ClassList::default();
    for class in override_class.unwrap_or_default().split_whitespace() {
        list.push(class);
    }

    let base = prefix.token(block.as_str());
    let modifiers = variants
        .iter()
        .filter(|rule| rule.applies)
        .map(|rule| prefix.modifier_token(block.as_str(), &rule.modifier));
    for token in std::iter::once(base).chain(modifiers) {
        match lookup.lookup(&token).map(str::trim) {
            Some(class) if !class.is_empty() => {
                for piece in class.split_whitespace() {
                    list.push(piece);
                }
            }
            _ => list.missing.push(token),
        }
    }
    list
}

/// Declarative description of a root element's classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecipe {
    block: BlockName,
    override_class: Option<String>,
    rules: Vec<VariantRule>,
}

impl ClassRecipe {
    /// Starts a recipe for `block` with no override and no variants.
    pub fn new(block: BlockName) -> Self {
        Self {
            block,
            override_class: None,
            rules: Vec::new(),
        }
    }

    /// Sets the caller-supplied override class.
    pub fn with_override(mut self, class: Option<impl Into<String>>) -> Self {
        self.override_class = class.map(Into::into);
        self
    }

    /// Appends one variant rule; rules resolve in the order they are added.
    pub fn variant(mut self, modifier: impl Into<Cow<'static, str>>, applies: bool) -> Self {
        self.rules.push(VariantRule::new(modifier, applies));
        self
    }

    /// Appends several rules in order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = VariantRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Returns the block identifier.
    pub fn block(&self) -> &BlockName {
        &self.block
    }

    /// Resolves against a theme.
    pub fn resolve(&self, theme: &Theme) -> ClassList {
        resolve_class_names(
            theme.prefix(),
            theme.styles(),
            &self.block,
            &self.rules,
            self.override_class.as_deref(),
        )
    }
}
