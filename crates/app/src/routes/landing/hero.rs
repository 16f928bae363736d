use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdDatabase, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

const HEADLINE_STATS: &[(&str, &str)] = &[
    ("99.9%", "Accuracy"),
    ("24/7", "Monitoring"),
    ("0.3s", "Response"),
];

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-grid",
                div { class: "hero-copy",
                    Badge { variant: BadgeVariant::Secondary,
                        Icon::<LdShield> { icon: LdShield, width: 14, height: 14 }
                        "SIH 2025 Solution"
                    }
                    h1 { class: "hero-title", "ExaSecure AI" }
                    p { class: "hero-tagline",
                        "Aadhaar-Linked Smart Identity & Academic Authenticity Validator"
                    }
                    p { class: "hero-description",
                        "AI-powered platform that validates academic documents and authenticates "
                        "candidate identity in real time. Stop fraud before it happens with biometric "
                        "verification, blockchain security and forgery detection."
                    }

                    div { class: "hero-chips",
                        HeroChip { label: "Biometric Auth",
                            Icon::<LdCheck> { icon: LdCheck, width: 20, height: 20 }
                        }
                        HeroChip { label: "AI Fraud Detection",
                            Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                        }
                        HeroChip { label: "Blockchain Security",
                            Icon::<LdDatabase> { icon: LdDatabase, width: 20, height: 20 }
                        }
                        HeroChip { label: "Real-time Validation",
                            Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                        }
                    }

                    div { class: "hero-actions",
                        Button {
                            size: ButtonSize::Lg,
                            onclick: move |_| { navigator().push(Route::Login {}); },
                            "Start Verification"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Lg,
                            onclick: move |_| { navigator().push(Route::Dashboard {}); },
                            "View Dashboard"
                        }
                    }
                }

                div { class: "hero-panel",
                    div { class: "hero-stats",
                        for (value, label) in HEADLINE_STATS.iter().copied() {
                            div { key: "{label}", class: "hero-stat",
                                span { class: "hero-stat-value", "{value}" }
                                span { class: "hero-stat-label", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeroChip(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "hero-chip",
            span { class: "hero-chip-icon", {children} }
            span { "{label}" }
        }
    }
}
