//! Goal detail screen.

use dailygoals_core::{dates, CoreError, Goal, GoalId};
use dailygoals_ui::{PriorityBadge, Spinner};
use dioxus::prelude::*;

use crate::context::{use_tracker, use_tracker_ready};

/// What the detail screen currently shows
enum DetailState {
    Loading,
    Missing,
    Failed(String),
    Loaded(Goal),
}

/// Read-only view of one goal, reached from the list
#[component]
pub fn GoalDetail(id: i64) -> Element {
    let tracker = use_tracker();
    let tracker_ready = use_tracker_ready();

    let mut state = use_signal(|| DetailState::Loading);

    use_effect(move || {
        if tracker_ready() {
            spawn(async move {
                let shared = tracker();
                let guard = shared.read().await;
                if let Some(ref trk) = *guard {
                    match trk.goals().fetch(GoalId(id)).await {
                        Ok(goal) => state.set(DetailState::Loaded(goal)),
                        Err(CoreError::GoalNotFound(_)) => state.set(DetailState::Missing),
                        Err(e) => state.set(DetailState::Failed(e.to_string())),
                    }
                }
            });
        }
    });

    let body = match &*state.read() {
        DetailState::Loading => rsx! {
            div { class: "detail-status",
                Spinner { label: "Loading goal details...".to_string() }
            }
        },
        DetailState::Failed(message) => rsx! {
            div { class: "detail-status",
                p { class: "detail-error", "Error: {message}" }
            }
        },
        DetailState::Missing => rsx! {
            div { class: "detail-status",
                p { class: "detail-missing", "Goal not found" }
            }
        },
        DetailState::Loaded(goal) => {
            let deadline = dates::format_long(&goal.deadline);
            rsx! {
                main { class: "detail-screen",
                    div { class: "detail-card",
                        h2 { class: "detail-title", "{goal.title}" }

                        div { class: "detail-row",
                            span { class: "detail-label", "Priority:" }
                            PriorityBadge { priority: goal.priority }
                        }

                        div { class: "detail-row",
                            span { class: "detail-label", "Deadline:" }
                            span { "{deadline}" }
                        }

                        div {
                            p { class: "detail-description-label", "Description:" }
                            p { class: "detail-description", "{goal.description}" }
                        }
                    }
                }
            }
        }
    };
    body
}
