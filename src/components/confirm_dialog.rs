//! Confirmation dialog for destructive actions.

use dailygoals_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Modal confirmation with Cancel and a destructive choice
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ConfirmDialog {
///         show: pending_delete().is_some(),
///         title: "Delete Goal".to_string(),
///         message: "Are you sure you want to delete this goal?".to_string(),
///         on_confirm: move |_| delete_now(),
///         on_cancel: move |_| pending_delete.set(None),
///     }
/// }
/// ```
#[component]
pub fn ConfirmDialog(
    /// Whether to show the dialog
    show: bool,
    /// Dialog heading
    title: String,
    /// Body text
    message: String,
    /// Label on the destructive choice
    #[props(default = "Delete".to_string())]
    confirm_label: String,
    /// Called when the user confirms
    on_confirm: EventHandler<()>,
    /// Called when the user backs out
    on_cancel: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog-box",
                h3 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Cancel,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
