use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads. Size it with `class` or `style`.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = crate::with_class("skeleton", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { "aria-hidden": "true", ..merged }
    }
}
