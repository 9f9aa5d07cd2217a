//! Priority Badge Component
//!
//! Uppercase colored marker for a goal's priority, used on the detail
//! screen. High renders with the error accent, medium with the warning
//! accent, low with the success accent.

use dailygoals_core::Priority;
use dioxus::prelude::*;

/// Properties for the PriorityBadge component
#[derive(Clone, PartialEq, Props)]
pub struct PriorityBadgeProps {
    /// The priority level to display
    pub priority: Priority,
}

/// Displays a goal's priority as uppercase accented text
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PriorityBadge { priority: goal.priority }
/// }
/// ```
#[component]
pub fn PriorityBadge(props: PriorityBadgeProps) -> Element {
    let class = badge_class(props.priority);
    let text = props.priority.as_str().to_uppercase();

    rsx! {
        span { class: "{class}", "{text}" }
    }
}

/// CSS class list for a priority level, keyed by its wire value
fn badge_class(priority: Priority) -> String {
    format!("priority-badge priority-{}", priority.as_str())
}
