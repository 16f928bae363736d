//! Dashboard sections that are navigable but not built out yet.

use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

#[component]
fn SectionPlaceholder(title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "section-page",
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{description}" }
            }
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "This section is not available yet." }
                }
                CardContent {
                    Badge { variant: BadgeVariant::Outline, "Coming soon" }
                }
            }
        }
    }
}

#[component]
pub fn Biometric() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Biometric Verification",
            description: "Fingerprint, iris and face checks against enrolment records.",
        }
    }
}

#[component]
pub fn Records() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Academic Records",
            description: "Certificates and transcripts submitted for validation.",
        }
    }
}

#[component]
pub fn Fraud() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Fraud Detection",
            description: "Flagged impersonation, tampering and duplicate certificates.",
        }
    }
}

#[component]
pub fn Security() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Exam Hall Security",
            description: "Unauthorized wireless devices detected during exams.",
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Analytics",
            description: "Verification trends and statistical reports.",
        }
    }
}

#[component]
pub fn DataSecurity() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Data Security",
            description: "Encryption, access control and audit trails.",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        SectionPlaceholder {
            title: "Settings",
            description: "Account and workspace preferences.",
        }
    }
}
