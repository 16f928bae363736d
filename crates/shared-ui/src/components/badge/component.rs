use dioxus::prelude::*;

/// Colour family for a badge.
///
/// The status variants line up with the green/yellow/red tones used by
/// verification rows and the system status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Success,
    Warning,
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
        }
    }
}

/// Small rounded label for statuses and tags.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut merged = crate::with_class("badge", attributes);
    merged.push(Attribute::new("data-variant", variant.class(), None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
    }
}
