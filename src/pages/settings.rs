//! Settings screen.

use dailygoals_core::PermissionStatus;
use dioxus::prelude::*;

use crate::components::{Tab, TabBar, ThemeToggle};
use crate::context::{use_tracker, use_tracker_ready};

/// Preferences, the notification flag, sign-out, and the about blurb
///
/// Sign-out flips the session phase; the gate then walks the user back
/// to the login screen.
#[component]
pub fn Settings() -> Element {
    let tracker = use_tracker();
    let tracker_ready = use_tracker_ready();

    let mut notifications = use_signal(|| Option::<PermissionStatus>::None);

    // Load the stored notification flag
    use_effect(move || {
        if tracker_ready() {
            spawn(async move {
                let shared = tracker();
                let guard = shared.read().await;
                if let Some(ref trk) = *guard {
                    match trk.prefs().notification_permission() {
                        Ok(status) => notifications.set(status),
                        Err(e) => {
                            tracing::warn!("Failed to load notification permission: {}", e)
                        }
                    }
                }
            });
        }
    });

    // Flip granted <-> denied, mirroring the stored flag
    let toggle_notifications = move |_| {
        let next = match notifications() {
            Some(PermissionStatus::Granted) => PermissionStatus::Denied,
            _ => PermissionStatus::Granted,
        };
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                match trk.prefs().set_notification_permission(next) {
                    Ok(()) => notifications.set(Some(next)),
                    Err(e) => {
                        tracing::warn!("Failed to store notification permission: {}", e)
                    }
                }
            }
        });
    };

    let sign_out = move |_| {
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                trk.session().logout().await;
            }
        });
    };

    let enabled = notifications() == Some(PermissionStatus::Granted);

    rsx! {
        main { class: "settings-screen page-with-tabs",
            header { class: "settings-header",
                h1 { class: "settings-title", "Settings" }
            }

            section { class: "settings-section",
                h2 { class: "section-title", "Appearance" }
                div { class: "setting-item",
                    div { class: "setting-text",
                        p { class: "setting-label", "Theme" }
                        p { class: "setting-desc", "Choose your preferred theme" }
                    }
                    ThemeToggle {}
                }
            }

            section { class: "settings-section",
                h2 { class: "section-title", "Notifications" }
                div { class: "setting-item",
                    div { class: "setting-text",
                        p { class: "setting-label", "Goal Reminders" }
                        p { class: "setting-desc", "Receive notifications for goal deadlines" }
                    }
                    if enabled {
                        button {
                            class: "setting-enabled",
                            onclick: toggle_notifications,
                            "Enabled"
                        }
                    } else {
                        button {
                            class: "btn-primary",
                            onclick: toggle_notifications,
                            "Enable"
                        }
                    }
                }
            }

            section { class: "settings-section",
                h2 { class: "section-title", "Account" }
                button { class: "setting-item setting-row-button",
                    onclick: sign_out,
                    div { class: "setting-text",
                        p { class: "setting-label", "Sign Out" }
                        p { class: "setting-desc", "Log out of your account" }
                    }
                    span { class: "setting-chevron", "\u{203A}" }
                }
            }

            section { class: "settings-section",
                h2 { class: "section-title", "About" }
                div { class: "setting-item",
                    p { class: "version-text", "DailyGoals v1.0.0" }
                }
            }
        }
        TabBar { active: Tab::Settings }
    }
}
