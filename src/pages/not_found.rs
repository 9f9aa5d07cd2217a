//! Not-found screen for unmatched routes.

use dioxus::prelude::*;

use crate::app::Route;

/// Catch-all 404 screen, reachable in either auth state
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    tracing::debug!("Unmatched route: /{}", segments.join("/"));

    rsx! {
        main { class: "notfound-screen",
            p { class: "notfound-code", "404" }
            p { class: "notfound-message", "Page Not Found" }
            p { class: "notfound-subtext",
                "The page you're looking for doesn't exist or has been moved."
            }
            button {
                class: "notfound-home",
                onclick: move |_| {
                    navigator.push(Route::Welcome {});
                },
                "Go to Home"
            }
        }
    }
}
