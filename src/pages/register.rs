//! Registration screen.

use dailygoals_core::{RegisterErrors, RegisterForm};
use dailygoals_ui::{AlertBanner, Button, Input};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_tracker;

/// Account creation form
///
/// When the backend signs the user straight in, the phase change walks
/// them through the gate to the goal list. When it instead leaves the
/// account pending email confirmation, we land on the welcome screen
/// like the original flow did.
#[component]
pub fn Register() -> Element {
    let tracker = use_tracker();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(RegisterErrors::default);
    let mut api_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let form = RegisterForm {
            username: username(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        let found = form.validate();
        let passed = found.is_empty();
        errors.set(found);
        if !passed {
            return;
        }

        submitting.set(true);
        api_error.set(None);
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                match trk
                    .session()
                    .register(form.username.trim(), form.email.trim(), &form.password)
                    .await
                {
                    // Signed straight in; the gate takes it from here
                    Ok(true) => {}
                    // Confirmation pending; back to the entry screen
                    Ok(false) => {
                        navigator.push(Route::Welcome {});
                    }
                    Err(e) => {
                        tracing::info!("Registration rejected: {}", e);
                        api_error.set(Some(e.to_string()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        main { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create Account" }

                if let Some(message) = api_error() {
                    AlertBanner { message }
                }

                Input {
                    value: username(),
                    oninput: move |s| username.set(s),
                    label: "Username".to_string(),
                    placeholder: "Enter your username".to_string(),
                    error: errors().username,
                }

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

                Input {
                    value: confirm_password(),
                    oninput: move |s| confirm_password.set(s),
                    label: "Confirm Password".to_string(),
                    placeholder: "Confirm your password".to_string(),
                    input_type: "password".to_string(),
                    error: errors().confirm_password,
                }

                Button {
                    class: "btn-block auth-submit".to_string(),
                    disabled: submitting(),
                    onclick: handle_submit,
                    "Register"
                }

                button {
                    class: "auth-link",
                    onclick: move |_| {
                        navigator.push(Route::Login {});
                    },
                    "Already have an account? Login here"
                }
            }
        }
    }
}
