use ds_style::{BlockName, ClassRecipe, Theme};
use leptos::*;

use super::resolve;

const HEADER: BlockName = BlockName::new("header");
const BODY: BlockName = BlockName::new("body");
const CAPTION: BlockName = BlockName::new("caption");
const BUTTON_TEXT: BlockName = BlockName::new("button-text");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Section heading level, rendered as `<h1>`–`<h6>`.
pub enum HeadingLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl HeadingLevel {
    fn token(self) -> &'static str {
        match self {
            Self::H1 => "1",
            Self::H2 => "2",
            Self::H3 => "3",
            Self::H4 => "4",
            Self::H5 => "5",
            Self::H6 => "6",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Body copy size.
pub enum BodyLevel {
    /// Default body copy.
    One,
    /// Compact body copy.
    Two,
}

impl BodyLevel {
    fn token(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typographic style: fixes the root tag and class tokens of a text primitive.
pub enum TextStyle {
    /// `{prefix}-header--{n}` on `<hN>`.
    Header(HeadingLevel),
    /// `{prefix}-body--{n}` on `<div>`.
    Body(BodyLevel),
    /// `{prefix}-caption` on `<span>`.
    Caption,
    /// `{prefix}-button-text` on `<span>`.
    ButtonText,
}

impl TextStyle {
    /// Root tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Header(level) => level.tag(),
            Self::Body(_) => "div",
            Self::Caption | Self::ButtonText => "span",
        }
    }

    /// Class recipe with the caller override.
    pub fn recipe(self, class: Option<&str>) -> ClassRecipe {
        let recipe = match self {
            Self::Header(level) => ClassRecipe::new(HEADER).variant(level.token(), true),
            Self::Body(level) => ClassRecipe::new(BODY).variant(level.token(), true),
            Self::Caption => ClassRecipe::new(CAPTION),
            Self::ButtonText => ClassRecipe::new(BUTTON_TEXT),
        };
        recipe.with_override(class)
    }

    /// Resolved root class attribute.
    pub fn class(self, theme: &Theme, class: Option<&str>) -> String {
        resolve(&self.recipe(class), theme)
    }
}

fn text_view(
    theme: &Theme,
    style: TextStyle,
    class: Option<String>,
    children: Option<Children>,
) -> View {
    let class = style.class(theme, class.as_deref());
    let content = children.map(|children| children());
    match style {
        TextStyle::Header(HeadingLevel::H1) => view! { <h1 class=class>{content}</h1> }.into_view(),
        TextStyle::Header(HeadingLevel::H2) => view! { <h2 class=class>{content}</h2> }.into_view(),
        TextStyle::Header(HeadingLevel::H3) => view! { <h3 class=class>{content}</h3> }.into_view(),
        TextStyle::Header(HeadingLevel::H4) => view! { <h4 class=class>{content}</h4> }.into_view(),
        TextStyle::Header(HeadingLevel::H5) => view! { <h5 class=class>{content}</h5> }.into_view(),
        TextStyle::Header(HeadingLevel::H6) => view! { <h6 class=class>{content}</h6> }.into_view(),
        TextStyle::Body(_) => view! { <div class=class>{content}</div> }.into_view(),
        TextStyle::Caption | TextStyle::ButtonText => {
            view! { <span class=class>{content}</span> }.into_view()
        }
    }
}

#[component]
/// Section heading at an explicit level.
pub fn Heading(
    theme: Theme,
    level: HeadingLevel,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(level), class, children)
}

#[component]
/// `<h1>` heading.
pub fn Header1(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(HeadingLevel::H1), class, children)
}

#[component]
/// `<h2>` heading.
pub fn Header2(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(HeadingLevel::H2), class, children)
}

#[component]
/// `<h3>` heading.
pub fn Header3(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(HeadingLevel::H3), class, children)
}

#[component]
/// `<h4>` heading.
pub fn Header4(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(HeadingLevel::H4), class, children)
}

#[component]
/// `<h5>` heading.
pub fn Header5(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(HeadingLevel::H5), class, children)
}

#[component]
/// `<h6>` heading.
pub fn Header6(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Header(HeadingLevel::H6), class, children)
}

#[component]
/// Body copy block at an explicit level.
pub fn Body(
    theme: Theme,
    #[prop(default = BodyLevel::One)] level: BodyLevel,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Body(level), class, children)
}

#[component]
/// Default body copy block.
pub fn Body1(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Body(BodyLevel::One), class, children)
}

#[component]
/// Compact body copy block.
pub fn Body2(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Body(BodyLevel::Two), class, children)
}

#[component]
/// Inline caption text.
pub fn Caption(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::Caption, class, children)
}

#[component]
/// Label wrapper placed inside every [`Button`](super::Button).
pub fn ButtonText(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    text_view(&theme, TextStyle::ButtonText, class, children)
}
