use ds_style::{BlockName, ClassList, ClassRecipe, Theme, VariantRule};
use leptos::ev::MouseEvent;
use leptos::*;

use super::class_attr;
use super::typography::ButtonText;

const BUTTON: BlockName = BlockName::new("button");
const SHARED_ATTRIBUTES: [&str; 2] = ["class", "tabindex"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual kind of a button. One kind applies per render.
pub enum ButtonKind {
    /// Primary emphasized action.
    Primary,
    /// Destructive action.
    Danger,
    /// Secondary action.
    Secondary,
    /// Borderless action.
    Ghost,
    /// Low-emphasis outlined action.
    Tertiary,
    /// Context-menu style action.
    Context,
}

impl ButtonKind {
    /// All kinds in class-resolution order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Danger,
        Self::Secondary,
        Self::Ghost,
        Self::Tertiary,
        Self::Context,
    ];

    /// Modifier token for this kind.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Danger => "danger",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Tertiary => "tertiary",
            Self::Context => "context",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` attribute of a `<button>` root.
pub enum ButtonType {
    /// `type="button"`.
    Button,
    /// `type="submit"`.
    Submit,
    /// `type="reset"`.
    Reset,
}

impl ButtonType {
    /// Attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Variant flags that contribute button modifier tokens.
///
/// Flags are independent; `small`, `disabled` and `skeleton` may all be set at once.
pub struct ButtonFlags {
    /// Dense size.
    pub small: bool,
    /// Visual kind.
    pub kind: Option<ButtonKind>,
    /// Disabled state.
    pub disabled: bool,
    /// Loading placeholder state.
    pub skeleton: bool,
}

impl ButtonFlags {
    /// Rules in the fixed check order: `sm`, each kind, `disabled`, `skeleton`.
    pub fn rules(self) -> Vec<VariantRule> {
        let mut rules = Vec::with_capacity(ButtonKind::ALL.len() + 3);
        rules.push(VariantRule::new("sm", self.small));
        rules.extend(
            ButtonKind::ALL
                .into_iter()
                .map(|kind| VariantRule::new(kind.token(), self.kind == Some(kind))),
        );
        rules.push(VariantRule::new("disabled", self.disabled));
        rules.push(VariantRule::new("skeleton", self.skeleton));
        rules
    }
}

/// Resolves the root classes of a button.
pub fn button_classes(theme: &Theme, flags: ButtonFlags, class: Option<&str>) -> ClassList {
    ClassRecipe::new(BUTTON)
        .with_override(class)
        .rules(flags.rules())
        .resolve(theme)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Attributes only valid on a native `<button>` root.
pub struct NativeButton {
    /// Optional `type` attribute.
    pub button_type: Option<ButtonType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Attributes only valid on an `<a role="button">` root.
pub struct LinkButton {
    /// Link target.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Root element of a button, chosen once per render by the presence of `href`.
pub enum ButtonRoot {
    /// `<button>` element.
    Native(NativeButton),
    /// `<a role="button">` element.
    Link(LinkButton),
}

impl ButtonRoot {
    /// Picks the link form when `href` is present.
    pub fn select(href: Option<String>, button_type: Option<ButtonType>) -> Self {
        match href {
            Some(href) => Self::Link(LinkButton { href }),
            None => Self::Native(NativeButton { button_type }),
        }
    }

    /// Tag name of the root element.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Native(_) => "button",
            Self::Link(_) => "a",
        }
    }

    /// Whether the button itself renders attribute `name` on this root.
    pub fn owns_attribute(&self, name: &str) -> bool {
        let root_owned: &[&str] = match self {
            Self::Native(_) => &["disabled", "type"],
            Self::Link(_) => &["role", "href", "aria-disabled"],
        };
        SHARED_ATTRIBUTES.contains(&name) || root_owned.contains(&name)
    }

    /// Drops pass-through attributes that would duplicate one the button renders itself.
    pub fn pass_through(
        &self,
        attributes: Vec<(&'static str, Attribute)>,
    ) -> Vec<(&'static str, Attribute)> {
        attributes
            .into_iter()
            .filter(|(name, _)| {
                let owned = self.owns_attribute(name);
                if owned {
                    logging::debug_warn!("pass-through `{name}` ignored on <{}>", self.tag());
                }
                !owned
            })
            .collect()
    }
}

#[component]
/// Design-system button.
///
/// Renders a native `<button>`, or an `<a role="button">` when `href` is supplied. Children are
/// always wrapped in [`ButtonText`]. Extra attributes (`attr:aria-label`, `attr:data-*`, ...) are
/// forwarded to the root, except those the button renders itself (see
/// [`ButtonRoot::owns_attribute`]); a caller class belongs in `class`.
pub fn Button(
    theme: Theme,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] skeleton: MaybeSignal<bool>,
    #[prop(optional, into)] small: MaybeSignal<bool>,
    #[prop(optional)] kind: Option<ButtonKind>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] tabindex: Option<i32>,
    #[prop(optional)] button_type: Option<ButtonType>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let override_class = class;
    let text_theme = theme.clone();
    let root_class = move || {
        let flags = ButtonFlags {
            small: small.get(),
            kind,
            disabled: disabled.get(),
            skeleton: skeleton.get(),
        };
        class_attr(&button_classes(&theme, flags, override_class.as_deref()))
    };
    let content = view! {
        <ButtonText theme=text_theme>{children.map(|children| children())}</ButtonText>
    };

    let root = ButtonRoot::select(href, button_type);
    let attributes = root.pass_through(attributes);

    match root {
        ButtonRoot::Link(LinkButton { href }) => view! {
            <a
                {..attributes}
                role="button"
                href=href
                class=root_class
                tabindex=tabindex
                aria-disabled=move || disabled.get().then_some("true")
                on:click=move |ev: MouseEvent| {
                    if disabled.get_untracked() {
                        ev.prevent_default();
                        return;
                    }
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {content}
            </a>
        }
        .into_view(),
        ButtonRoot::Native(NativeButton { button_type }) => view! {
            <button
                {..attributes}
                class=root_class
                tabindex=tabindex
                disabled=move || disabled.get()
                type=button_type.map(ButtonType::token)
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {content}
            </button>
        }
        .into_view(),
    }
}
