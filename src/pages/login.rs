//! Login screen.

use dailygoals_core::{LoginErrors, LoginForm};
use dailygoals_ui::{Button, Input};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_tracker;

/// Email/password sign-in form
///
/// A successful sign-in flips the session phase; the auth gate observes
/// the change and moves the user to the goal list, so there is no
/// navigation call in the submit handler. Provider rejections land on
/// the password field.
#[component]
pub fn Login() -> Element {
    let tracker = use_tracker();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(LoginErrors::default);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let found = form.validate();
        let passed = found.is_empty();
        errors.set(found);
        if !passed {
            return;
        }

        submitting.set(true);
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                if let Err(e) = trk
                    .session()
                    .login(form.email.trim(), &form.password)
                    .await
                {
                    tracing::info!("Login rejected: {}", e);
                    errors.set(LoginErrors {
                        email: None,
                        password: Some(e.to_string()),
                    });
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        main { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-title", "Login" }

                Input {
                    value: email(),
                    oninput: move |s| email.set(s),
                    label: "Email".to_string(),
                    placeholder: "Enter your email".to_string(),
                    input_type: "email".to_string(),
                    error: errors().email,
                }

                Input {
                    value: password(),
                    oninput: move |s| password.set(s),
                    label: "Password".to_string(),
                    placeholder: "Enter your password".to_string(),
                    input_type: "password".to_string(),
                    error: errors().password,
                }

                Button {
                    class: "btn-block auth-submit".to_string(),
                    disabled: submitting(),
                    onclick: handle_submit,
                    "Log In"
                }

                button {
                    class: "auth-link",
                    onclick: move |_| {
                        navigator.push(Route::Register {});
                    },
                    "Don't have an account? Register here"
                }
            }
        }
    }
}
