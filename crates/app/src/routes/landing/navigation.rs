use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronRight, LdMenu, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Sheet, SheetClose, SheetContent,
    SheetFooter, SheetHeader, SheetSide, SheetTitle,
};

/// In-page anchors shown in both the desktop bar and the mobile sheet.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("Features", "#features"),
    ("Security", "#security"),
    ("Dashboard", "#dashboard"),
    ("Integration", "#integration"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navigation() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "landing-nav",
            div { class: "landing-nav-inner",
                Brand {}

                div { class: "landing-nav-links",
                    for (name, href) in NAV_ITEMS.iter().copied() {
                        a { key: "{name}", class: "landing-nav-link", href, "{name}" }
                    }
                }

                div { class: "landing-nav-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        onclick: move |_| { navigator().push(Route::Login {}); },
                        "Login"
                    }
                    Button {
                        size: ButtonSize::Sm,
                        onclick: move |_| { navigator().push(Route::Login {}); },
                        "Get Started"
                        Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                    }
                }

                div { class: "landing-nav-toggle",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Open menu",
                        onclick: move |_| menu_open.set(true),
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                }
            }
        }

        Sheet {
            open: menu_open(),
            on_close: move |_| menu_open.set(false),
            side: SheetSide::Right,
            SheetHeader {
                SheetTitle { "ExaSecure AI" }
                SheetClose { on_close: move |_| menu_open.set(false) }
            }
            SheetContent {
                for (name, href) in NAV_ITEMS.iter().copied() {
                    a {
                        key: "{name}",
                        class: "landing-sheet-link",
                        href,
                        onclick: move |_| menu_open.set(false),
                        "{name}"
                    }
                }
            }
            SheetFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    class: "landing-sheet-action",
                    onclick: move |_| {
                        menu_open.set(false);
                        navigator().push(Route::Login {});
                    },
                    "Login"
                }
                Button {
                    class: "landing-sheet-action",
                    onclick: move |_| {
                        menu_open.set(false);
                        navigator().push(Route::Login {});
                    },
                    "Get Started"
                }
            }
        }
    }
}

#[component]
fn Brand() -> Element {
    rsx! {
        div { class: "landing-brand",
            div { class: "landing-brand-mark",
                Icon::<LdShield> { icon: LdShield, width: 24, height: 24 }
            }
            div {
                span { class: "landing-brand-name", "ExaSecure AI" }
                Badge { variant: BadgeVariant::Secondary, "SIH 2025" }
            }
        }
    }
}
