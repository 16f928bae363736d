//! Public marketing page served at `/`.

mod features;
mod hero;
mod navigation;

use dioxus::prelude::*;
use features::Features;
use hero::Hero;
use navigation::Navigation;

#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }
        div { class: "landing",
            Navigation {}
            main {
                Hero {}
                section { id: "features", Features {} }
            }
        }
    }
}
