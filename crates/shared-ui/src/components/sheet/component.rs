use dioxus::prelude::*;

/// Which edge the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetSide {
    Left,
    #[default]
    Right,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Left => "left",
            SheetSide::Right => "right",
        }
    }
}

/// Slide-in panel over a dimmed backdrop. Clicking the backdrop closes it.
///
/// Nothing is rendered while `open` is false.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sheet-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SheetHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sheet-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SheetTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sheet-title", attributes);
    rsx! {
        h2 { ..merged, {children} }
    }
}

/// Pinned to the bottom of the panel.
#[component]
pub fn SheetFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sheet-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Close menu",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
