//! Theme toggle button.

use dailygoals_core::ThemeMode;
use dioxus::prelude::*;

use crate::context::{use_theme, use_tracker};

/// Switches between light and dark, showing the mode it would switch to
///
/// The signal flips immediately so the restyle is instant; persisting
/// the choice happens in the background and a failure only costs the
/// preference surviving a restart.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let tracker = use_tracker();

    let is_dark = theme() == ThemeMode::Dark;
    let icon = if is_dark { "\u{2600}" } else { "\u{1F319}" };
    let label = if is_dark { "Light" } else { "Dark" };

    let toggle = move |_| {
        let next = theme().toggled();
        theme.set(next);
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                if let Err(e) = trk.prefs().set_theme(next) {
                    tracing::warn!("Failed to persist theme: {}", e);
                }
            }
        });
    };

    rsx! {
        button { class: "theme-toggle", onclick: toggle,
            span { "{icon}" }
            "{label}"
        }
    }
}
