//! Feedback Components
//!
//! Loading and error states shared by the data-backed screens.

use dioxus::prelude::*;

/// Properties for the Spinner component
#[derive(Clone, PartialEq, Props)]
pub struct SpinnerProps {
    /// Optional message rendered under the indicator
    #[props(default)]
    pub label: Option<String>,
}

/// Centered loading indicator with an optional message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Spinner { label: "Loading goal details...".to_string() }
/// }
/// ```
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    rsx! {
        div { class: "spinner-wrap",
            span {
                class: "spinner",
                role: "status",
                "aria-label": "Loading",
            }
            if let Some(label) = &props.label {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}

/// Inline error line for request failures
///
/// Pages that validate per-field show those messages on the fields
/// themselves; this banner is for whole-screen failures like a goal fetch
/// or delete going wrong.
#[component]
pub fn AlertBanner(message: String) -> Element {
    rsx! {
        p { class: "error-banner", role: "alert", "{message}" }
    }
}
