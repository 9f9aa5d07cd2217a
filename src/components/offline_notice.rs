//! Full-screen notice shown while the backend is unreachable.

use dioxus::prelude::*;

/// Replaces the router until the reachability probe succeeds again
#[component]
pub fn OfflineNotice() -> Element {
    rsx! {
        div { class: "offline-screen",
            p { class: "offline-title", "No Internet Connection" }
            p { class: "offline-text",
                "Please check your network settings and try again."
            }
        }
    }
}
