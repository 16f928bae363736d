//! Dioxus component kit shared by the ExaSecure web app.
//!
//! Each component links its own stylesheet through `asset!`, so a page only
//! pulls the CSS for what it renders. Colours come from the CSS custom
//! properties declared in `app/assets/main.css`.

pub mod components;
pub mod request;

pub use components::*;
pub use request::*;

use dioxus::prelude::Attribute;

/// Prepend a static `class` to caller-supplied attributes.
///
/// Callers may pass their own `class`; `merge_attributes` joins the two.
pub(crate) fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// `"true"`/`"false"` for boolean `data-*` attributes.
pub(crate) fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}
