use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// A filled bar for a percentage in `0.0..=100.0`. Out-of-range values clamp.
#[component]
pub fn PercentBar(percent: f64) -> Element {
    let percent = percent.clamp(0.0, 100.0);

    rsx! {
        Progress {
            value: Some(percent),
            ProgressIndicator { style: "width: {percent}%" }
        }
    }
}
