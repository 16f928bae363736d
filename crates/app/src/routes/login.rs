use crate::auth::use_session;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input,
};
use std::collections::HashMap;

/// Email/password sign-in. Goes to the dashboard on success, or straight
/// away if a session already exists.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if session.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                session.set_user(user);
                navigator().push(Route::Dashboard {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Link { to: Route::Landing {}, class: "auth-brand",
                span { class: "auth-brand-mark",
                    Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                }
                span { class: "auth-brand-name", "ExaSecure AI" }
            }

            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Access the verification dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            autocomplete: "username",
                            placeholder: "you@institution.edu",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors().get("email").cloned(),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            autocomplete: "current-password",
                            placeholder: "At least 8 characters",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors().get("password").cloned(),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        Link { to: Route::Landing {}, "Back to home" }
                    }
                }
            }
        }
    }
}
