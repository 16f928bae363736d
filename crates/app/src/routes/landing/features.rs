use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdEye, LdFileCheck, LdFingerprint, LdLock, LdShield, LdTrendingUp, LdUsers, LdWifi,
};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Card};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeatureIcon {
    Fingerprint,
    Eye,
    FileCheck,
    Shield,
    Wifi,
    Chart,
    Lock,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Feature {
    icon: FeatureIcon,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 4],
}

const FEATURES: [Feature; 8] = [
    Feature {
        icon: FeatureIcon::Fingerprint,
        category: "Identity",
        title: "Multi-Layer Biometric Verification",
        description: "Aadhaar-based fingerprint and iris authentication with government-certified identity validation.",
        details: [
            "Fingerprint scanning",
            "Iris recognition",
            "Anti-spoofing AI",
            "Government database integration",
        ],
    },
    Feature {
        icon: FeatureIcon::Eye,
        category: "AI Security",
        title: "AI-Powered Face Recognition",
        description: "Facial recognition with anti-spoofing checks for secure identity verification.",
        details: [
            "3D face mapping",
            "Liveness detection",
            "Signature verification",
            "CNN/SSIM models",
        ],
    },
    Feature {
        icon: FeatureIcon::FileCheck,
        category: "Validation",
        title: "Certificate & Academic Validation",
        description: "OCR-based document extraction cross-checked against institutional databases.",
        details: [
            "OCR text extraction",
            "Database verification",
            "Blockchain QR codes",
            "Institutional ERP integration",
        ],
    },
    Feature {
        icon: FeatureIcon::Shield,
        category: "Security",
        title: "Forgery & Fraud Detection",
        description: "Anomaly detection that spots tampered documents and duplicate certificates.",
        details: [
            "Grade tampering detection",
            "Photo manipulation alerts",
            "Invalid ID scanning",
            "Duplicate certificate tracking",
        ],
    },
    Feature {
        icon: FeatureIcon::Wifi,
        category: "Monitoring",
        title: "Exam Hall Security",
        description: "ESP32-based wireless device detection against cheating and unauthorized devices.",
        details: [
            "Wi-Fi device scanning",
            "Bluetooth monitoring",
            "Hidden device detection",
            "Real-time alerts",
        ],
    },
    Feature {
        icon: FeatureIcon::Chart,
        category: "Analytics",
        title: "Admin & Analytics Dashboard",
        description: "Control center for education authorities with real-time monitoring.",
        details: [
            "Real-time fraud alerts",
            "Verification logs",
            "Candidate tracking",
            "Statistical reports",
        ],
    },
    Feature {
        icon: FeatureIcon::Lock,
        category: "Privacy",
        title: "Data Security & Privacy",
        description: "Encrypted storage and role-based access control.",
        details: [
            "Aadhaar KYC compliance",
            "Encrypted data storage",
            "Role-based permissions",
            "Audit trails",
        ],
    },
    Feature {
        icon: FeatureIcon::Users,
        category: "Integration",
        title: "Institutional Integration",
        description: "Connects to university systems and education department databases.",
        details: [
            "Bulk record uploads",
            "API integrations",
            "Multi-tenant support",
            "Custom workflows",
        ],
    },
];

const IMPACTS: [&str; 4] = [
    "Prevents fake degrees in jobs/admissions",
    "Ensures genuine candidates only",
    "Protects institutional reputation",
    "Creates trusted academic ecosystem",
];

#[component]
pub fn Features() -> Element {
    rsx! {
        div { class: "features",
            div { class: "features-header",
                Badge { variant: BadgeVariant::Outline, "Core Features" }
                h2 { class: "features-title", "Complete Security Ecosystem" }
                p { class: "features-lead",
                    "ExaSecure AI protects against academic fraud end to end through "
                    "biometrics, AI detection and blockchain verification."
                }
            }

            div { class: "features-grid",
                for feature in FEATURES {
                    FeatureCard { key: "{feature.title}", feature }
                }
            }

            div { class: "impact", id: "security",
                h3 { class: "impact-title", "Expected Impact" }
                div { class: "impact-grid",
                    for (idx, impact) in IMPACTS.iter().enumerate() {
                        div { key: "{idx}", class: "impact-tile",
                            span { class: "impact-number", "{idx + 1}" }
                            p { "{impact}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        Card { class: "feature-card",
            Badge { class: "feature-category", variant: BadgeVariant::Secondary, "{feature.category}" }
            div { class: "feature-icon", FeatureGlyph { icon: feature.icon } }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-description", "{feature.description}" }
            ul { class: "feature-details",
                for detail in feature.details {
                    li { key: "{detail}", "{detail}" }
                }
            }
        }
    }
}

#[component]
fn FeatureGlyph(icon: FeatureIcon) -> Element {
    match icon {
        FeatureIcon::Fingerprint => rsx! { Icon::<LdFingerprint> { icon: LdFingerprint, width: 24, height: 24 } },
        FeatureIcon::Eye => rsx! { Icon::<LdEye> { icon: LdEye, width: 24, height: 24 } },
        FeatureIcon::FileCheck => rsx! { Icon::<LdFileCheck> { icon: LdFileCheck, width: 24, height: 24 } },
        FeatureIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: 24, height: 24 } },
        FeatureIcon::Wifi => rsx! { Icon::<LdWifi> { icon: LdWifi, width: 24, height: 24 } },
        FeatureIcon::Chart => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } },
        FeatureIcon::Lock => rsx! { Icon::<LdLock> { icon: LdLock, width: 24, height: 24 } },
        FeatureIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_feature_has_a_distinct_category_and_icon() {
        let categories: HashSet<_> = FEATURES.iter().map(|f| f.category).collect();
        let icons: HashSet<_> = FEATURES.iter().map(|f| f.icon as u8).collect();
        assert_eq!(categories.len(), FEATURES.len());
        assert_eq!(icons.len(), FEATURES.len());
    }

    #[test]
    fn details_are_never_blank() {
        for feature in FEATURES {
            assert!(feature.details.iter().all(|d| !d.trim().is_empty()), "{}", feature.title);
        }
    }
}
