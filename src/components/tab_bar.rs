//! Bottom tab bar for the dashboard screens.

use dioxus::prelude::*;

use crate::app::Route;

/// Which dashboard tab is highlighted
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Home,
    Settings,
}

/// Fixed bottom navigation between Home and Settings
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "page-with-tabs",
///         // screen content
///     }
///     TabBar { active: Tab::Home }
/// }
/// ```
#[component]
pub fn TabBar(active: Tab) -> Element {
    rsx! {
        nav { class: "tab-bar",
            Link {
                to: Route::Home {},
                class: if active == Tab::Home { "tab-item active" } else { "tab-item" },
                span { class: "tab-icon", "\u{2302}" }
                span { class: "tab-label", "Home" }
            }
            Link {
                to: Route::Settings {},
                class: if active == Tab::Settings { "tab-item active" } else { "tab-item" },
                span { class: "tab-icon", "\u{2699}" }
                span { class: "tab-label", "Settings" }
            }
        }
    }
}
