//! Welcome screen - the public entry route.

use dailygoals_ui::Button;
use dioxus::prelude::*;

use crate::app::Route;

/// App title and the two ways in
///
/// Signed-in users never see this screen; the gate bounces them to the
/// goal list.
#[component]
pub fn Welcome() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "welcome-screen",
            h1 { class: "welcome-title", "Daily Goals Tracker" }

            div { class: "welcome-actions",
                Button {
                    class: "btn-block".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::Login {});
                    },
                    span { "\u{1F512}" }
                    "Login"
                }
                Button {
                    class: "btn-block".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::Register {});
                    },
                    span { "\u{1F464}" }
                    "Sign Up"
                }
            }
        }
    }
}
