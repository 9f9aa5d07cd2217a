//! Goal list card with edit and delete actions.

use dailygoals_core::{dates, Goal};
use dailygoals_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;

/// Properties for the GoalCard component
#[derive(Clone, PartialEq, Props)]
pub struct GoalCardProps {
    /// The goal to render
    pub goal: Goal,
    /// Called when the user taps Delete; the confirmation dialog is the
    /// list's responsibility
    pub on_delete: EventHandler<()>,
}

/// One entry in the home screen's goal list
///
/// The title links to the detail screen; Edit opens the shared goal
/// form in edit mode.
#[component]
pub fn GoalCard(props: GoalCardProps) -> Element {
    let navigator = use_navigator();
    let goal = &props.goal;
    let id = goal.id;
    let deadline = dates::format_short(&goal.deadline);

    rsx! {
        div { class: "goal-card",
            div {
                Link { to: Route::GoalDetail { id: id.as_i64() },
                    h3 { class: "goal-card-title", "{goal.title}" }
                }
                p { class: "goal-card-desc", "{goal.description}" }
                p { class: "goal-card-priority", "Priority: {goal.priority.as_str()}" }
                p { class: "goal-card-deadline", "Deadline: {deadline}" }
            }
            div { class: "goal-card-actions",
                Button {
                    variant: ButtonVariant::Edit,
                    onclick: move |_| {
                        navigator.push(Route::GoalEdit { id: id.as_i64() });
                    },
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| props.on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
