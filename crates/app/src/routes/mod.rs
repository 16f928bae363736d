pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod sections;

use crate::auth::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdDatabase, LdFileText, LdFingerprint, LdLayoutDashboard, LdLogOut, LdMenu,
    LdSettings, LdShield, LdShieldAlert,
};
use dioxus_free_icons::Icon;
use shared_types::{AppError, AuthUser, UNAVAILABLE_MESSAGE};
use shared_ui::{
    Avatar, AvatarFallback, Button, ButtonSize, ButtonVariant, Separator, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger,
};

use dashboard::Dashboard;
use landing::Landing;
use login::Login;
use not_found::NotFound;
use sections::{Analytics, Biometric, DataSecurity, Fraud, Records, Security, Settings};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/biometric")]
    Biometric {},
    #[route("/dashboard/records")]
    Records {},
    #[route("/dashboard/fraud")]
    Fraud {},
    #[route("/dashboard/security")]
    Security {},
    #[route("/dashboard/analytics")]
    Analytics {},
    #[route("/dashboard/data")]
    DataSecurity {},
    #[route("/dashboard/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// What the auth guard does with the session lookup result.
#[derive(Debug, Clone, PartialEq)]
enum GuardDecision {
    Allow(AuthUser),
    SignIn,
    /// The lookup itself failed; the session may still be fine.
    Unavailable(String),
}

fn guard_decision(lookup: Result<Option<AuthUser>, String>) -> GuardDecision {
    match lookup {
        Ok(Some(user)) => GuardDecision::Allow(user),
        Ok(None) => GuardDecision::SignIn,
        Err(message) if AppError::is_unauthorized(&message) => GuardDecision::SignIn,
        Err(message) => GuardDecision::Unavailable(message),
    }
}

/// Redirects to `/auth` unless a session exists.
///
/// Uses `use_server_future` with `?` so SSR suspends until the session
/// lookup resolves and hydration reuses the embedded result. The
/// `SuspenseBoundary` in `App` shows the loading state meanwhile.
#[component]
fn AuthGuard() -> Element {
    let mut session = use_session();

    let mut resource =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    let decision = resource
        .read()
        .as_ref()
        .map(|lookup| guard_decision(lookup.clone().map_err(|e| e.to_string())));

    use_effect(move || {
        let Some(lookup) = resource.read().as_ref().cloned() else {
            return;
        };
        match guard_decision(lookup.map_err(|e| e.to_string())) {
            GuardDecision::Allow(user) => {
                if session.user.peek().as_ref() != Some(&user) {
                    session.set_user(user);
                }
            }
            GuardDecision::SignIn => {
                session.clear();
                navigator().push(Route::Login {});
            }
            GuardDecision::Unavailable(message) => {
                tracing::error!(error = %message, "session check failed");
            }
        }
    });

    match decision {
        Some(GuardDecision::Allow(_)) => rsx! { Outlet::<Route> {} },
        Some(GuardDecision::SignIn) => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to sign in..." }
            }
        },
        Some(GuardDecision::Unavailable(_)) => rsx! {
            div { class: "auth-guard-loading",
                p { "{UNAVAILABLE_MESSAGE}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| resource.restart(),
                    "Try again"
                }
            }
        },
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Sidebar navigation, user identity and system status around every
/// dashboard page.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();

    // Independent of each other and of the page content
    use_future(move || session.load_profile());
    use_future(move || session.load_system_status());

    let status = (session.system_status)();
    let display_name = session.display_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        div { class: "sidebar-brand-mark",
                            Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                        }
                        div {
                            span { class: "sidebar-brand-name", "ExaSecure AI" }
                            span { class: "sidebar-brand-tagline", "Identity Validator" }
                        }
                    }
                }

                SidebarContent {
                    SidebarGroupLabel { "Navigation" }
                    SidebarMenu {
                        NavEntry { to: Route::Dashboard {}, current: route.clone(), label: "Dashboard",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::Biometric {}, current: route.clone(), label: "Biometric Verification",
                            Icon::<LdFingerprint> { icon: LdFingerprint, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::Records {}, current: route.clone(), label: "Academic Records",
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::Fraud {}, current: route.clone(), label: "Fraud Detection",
                            Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::Security {}, current: route.clone(), label: "Exam Hall Security",
                            Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::Analytics {}, current: route.clone(), label: "Analytics",
                            Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::DataSecurity {}, current: route.clone(), label: "Data Security",
                            Icon::<LdDatabase> { icon: LdDatabase, width: 16, height: 16 }
                        }
                        NavEntry { to: Route::Settings {}, current: route.clone(), label: "Settings",
                            Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        Avatar {
                            AvatarFallback { "{session.initials()}" }
                        }
                        div { class: "sidebar-user-text",
                            p { class: "sidebar-user-name", "{display_name}" }
                            p { class: "sidebar-user-role", "{session.role_label()}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            aria_label: "Sign out",
                            onclick: move |_| {
                                spawn(async move {
                                    session.sign_out().await;
                                    navigator().push(Route::Login {});
                                });
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        }
                    }

                    Separator {}

                    div { class: "system-status",
                        span { class: "status-dot", "data-tone": status.tone().as_str() }
                        span { class: "system-status-text", "{status.message()}" }
                    }
                }
            }

            SidebarInset {
                header { class: "dashboard-topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    span { class: "dashboard-topbar-title", "ExaSecure AI" }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// One sidebar link, highlighted when `current` is its route.
#[component]
fn NavEntry(to: Route, current: Route, label: &'static str, children: Element) -> Element {
    let active = to == current;

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                active,
                onclick: move |_| {
                    navigator().push(to.clone());
                },
                {children}
                span { "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    fn user() -> AuthUser {
        AuthUser {
            id: uuid::Uuid::nil(),
            email: "demo@exasecure.ai".into(),
        }
    }

    fn wrapped(kind: AppErrorKind) -> String {
        let err = AppError {
            kind,
            message: "x".into(),
            field_errors: Default::default(),
        };
        serde_json::to_string(&err).unwrap()
    }

    #[test]
    fn signed_in_user_passes_the_guard() {
        assert_eq!(guard_decision(Ok(Some(user()))), GuardDecision::Allow(user()));
    }

    #[test]
    fn missing_or_rejected_session_goes_to_sign_in() {
        assert_eq!(guard_decision(Ok(None)), GuardDecision::SignIn);
        assert_eq!(
            guard_decision(Err(wrapped(AppErrorKind::Unauthorized))),
            GuardDecision::SignIn
        );
    }

    #[test]
    fn server_trouble_does_not_sign_the_user_out() {
        let db = wrapped(AppErrorKind::DatabaseError);
        assert_eq!(guard_decision(Err(db.clone())), GuardDecision::Unavailable(db));
        assert_eq!(
            guard_decision(Err("connection refused".into())),
            GuardDecision::Unavailable("connection refused".into())
        );
    }
}
