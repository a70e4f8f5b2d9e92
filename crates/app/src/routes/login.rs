use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::components::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Login page with email/password.
///
/// Accepts an optional `redirect` query param set by the route-gating
/// middleware; after signing in, navigates there instead of the
/// dashboard so the user lands where they were originally headed.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let lang = use_lang();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving
    // ownership.
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        if let Some(ref path) = *redirect_target.read() {
            navigator().push(NavigationTarget::<Route>::External(path.clone()));
        } else {
            navigator().push(Route::Dashboard {});
        }
    };

    // Already signed in: skip the form entirely.
    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                go_to_destination();
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
        div { class: "login-page",
            Card {
                CardHeader {
                    CardTitle { {tr(lang, "login.title")} }
                    CardDescription { {tr(lang, "login.subtitle")} }
                }
                CardContent {
                    Form {
                        onsubmit: handle_login,
                        Input {
                            label: tr(lang, "field.email"),
                            input_type: "email".to_string(),
                            value: email.read().clone(),
                            on_input: move |evt: FormEvent| email.set(evt.value().to_string()),
                        }
                        if let Some(message) = field_errors.read().get("email") {
                            span { class: "field-error", "{message}" }
                        }
                        Input {
                            label: tr(lang, "field.password"),
                            input_type: "password".to_string(),
                            value: password.read().clone(),
                            on_input: move |evt: FormEvent| password.set(evt.value().to_string()),
                        }
                        if let Some(message) = field_errors.read().get("password") {
                            span { class: "field-error", "{message}" }
                        }
                        if let Some(message) = error_msg.read().as_ref() {
                            p { class: "login-error", "{message}" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: loading(),
                            if loading() {
                                {tr(lang, "login.signing_in")}
                            } else {
                                {tr(lang, "login.submit")}
                            }
                        }
                    }
                }
            }
        }
    }
}
