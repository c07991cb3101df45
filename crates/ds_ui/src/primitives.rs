//! Button and typography primitives.

use ds_style::{ClassList, ClassRecipe, Theme};
use leptos::logging;

mod button;
mod typography;

pub use button::{
    button_classes, Button, ButtonFlags, ButtonKind, ButtonRoot, ButtonType, LinkButton,
    NativeButton,
};
pub use typography::{
    Body, Body1, Body2, BodyLevel, ButtonText, Caption, Header1, Header2, Header3, Header4,
    Header5, Header6, Heading, HeadingLevel, TextStyle,
};

/// Joins a resolved class list, reporting dropped tokens in debug builds.
pub(crate) fn class_attr(classes: &ClassList) -> String {
    if !classes.missing_tokens().is_empty() {
        logging::debug_warn!(
            "no style entry for {}",
            classes.missing_tokens().join(", ")
        );
    }
    classes.as_string()
}

pub(crate) fn resolve(recipe: &ClassRecipe, theme: &Theme) -> String {
    class_attr(&recipe.resolve(theme))
}

#[cfg(test)]
pub(crate) mod test_html {
    use leptos::IntoView;

    /// Server-renders a view inside a fresh reactive runtime.
    pub(crate) fn render<N: IntoView>(view: impl FnOnce() -> N + 'static) -> String {
        leptos::ssr::render_to_string(view).to_string()
    }

    /// Attribute source of the first `<tag ...>` opening tag.
    pub(crate) fn open_tag<'a>(html: &'a str, tag: &str) -> &'a str {
        let needle = format!("<{tag}");
        let mut rest = html;
        while let Some(start) = rest.find(&needle) {
            let after = &rest[start + needle.len()..];
            if after.starts_with(' ') || after.starts_with('>') {
                let end = after.find('>').expect("unterminated tag");
                return &after[..end];
            }
            rest = after;
        }
        panic!("no <{tag}> in {html}");
    }

    /// Value of attribute `name`; bare boolean attributes yield `""`.
    pub(crate) fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
        let valued = format!(" {name}=\"");
        if let Some(start) = tag.find(&valued) {
            let value = &tag[start + valued.len()..];
            return value.find('"').map(|end| &value[..end]);
        }
        let bare = format!(" {name}");
        tag.match_indices(&bare).find_map(|(index, _)| {
            let next = tag[index + bare.len()..].chars().next();
            matches!(next, None | Some(' ')).then_some("")
        })
    }

    /// Number of times attribute `name` appears.
    pub(crate) fn attribute_count(tag: &str, name: &str) -> usize {
        let bare = format!(" {name}");
        tag.match_indices(&bare)
            .filter(|(index, _)| {
                let next = tag[index + bare.len()..].chars().next();
                matches!(next, None | Some(' ') | Some('='))
            })
            .count()
    }

    /// Whitespace-split `class` attribute.
    pub(crate) fn classes<'a>(tag: &'a str) -> Vec<&'a str> {
        attribute(tag, "class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }
}
