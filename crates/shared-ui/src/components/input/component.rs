use dioxus::prelude::*;

/// Labelled text field with an optional inline error message.
///
/// `id` ties the `<label>` to the `<input>`; leave it empty when there is
/// no label.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] id: String,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = crate::with_class("input", attributes);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-field",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                r#type: "{input_type}",
                value,
                placeholder,
                autocomplete,
                required,
                disabled,
                "aria-invalid": crate::flag(invalid),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "input-error", role: "alert", "{message}" }
            }
        }
    }
}
