use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{AuthError, AuthService};

use crate::context::AppContext;
use crate::routes::Route;

const INVALID_CREDENTIALS: &str = "Invalid username or password";
const GENERIC_LOGIN_ERROR: &str = "Something went wrong. Please try again.";

/// Run a submitted pair through the auth service and map the outcome to a
/// user-facing message. Kept out of the component so the mapping is
/// testable without a DOM.
async fn submit_login(
    auth: &AuthService,
    username: &str,
    password: &str,
) -> Result<(), &'static str> {
    match auth.login(username, password).await {
        Ok(()) => Ok(()),
        Err(AuthError::Credentials(_)) => Err(INVALID_CREDENTIALS),
        Err(_) => Err(GENERIC_LOGIN_ERROR),
    }
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);

    // An operator restored from a previous run skips the form.
    let restored = ctx.auth().is_authenticated();
    use_effect(move || {
        if restored {
            navigator.replace(Route::Dashboard {});
        }
    });

    let auth = ctx.auth();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        let submitted_username = username();
        let submitted_password = password();
        spawn(async move {
            match submit_login(&auth, &submitted_username, &submitted_password).await {
                Ok(()) => {
                    error.set(None);
                    navigator.replace(Route::Dashboard {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div { class: "login-screen",
            div { class: "login-card",
                div { class: "login-card__header",
                    h1 { "Offer Dashboard" }
                    p { "Sign in to access your dashboard" }
                }

                form { class: "login-form", onsubmit: on_submit,
                    div { class: "login-field",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "login-input",
                            r#type: "text",
                            placeholder: "Enter username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }

                    div { class: "login-field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "login-input",
                            r#type: "password",
                            placeholder: "Enter password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    if let Some(message) = error() {
                        div { class: "login-error", "{message}" }
                    }

                    button { class: "btn login-submit", r#type: "submit", "Sign In" }
                }

                div { class: "login-hint",
                    p {
                        "Demo credentials:"
                        br {}
                        strong { "Username: " }
                        "admin"
                        br {}
                        strong { "Password: " }
                        "admin123"
                    }
                }
            }
        }
    }
}
