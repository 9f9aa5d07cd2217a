//! Home screen - the goal list.

use dailygoals_core::{remove_goal, Goal, GoalId};
use dailygoals_ui::{AlertBanner, Button};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{ConfirmDialog, GoalCard, Tab, TabBar};
use crate::context::{use_tracker, use_tracker_ready};

/// The signed-in landing screen: every goal, newest first
///
/// Deletion is remote-first: the card only leaves the list after the
/// backend confirms, and a failed delete leaves the list untouched
/// behind an error line.
#[component]
pub fn Home() -> Element {
    let tracker = use_tracker();
    let tracker_ready = use_tracker_ready();
    let navigator = use_navigator();

    let mut goals: Signal<Vec<Goal>> = use_signal(Vec::new);
    let mut pending_delete: Signal<Option<GoalId>> = use_signal(|| None);
    let mut delete_error: Signal<Option<String>> = use_signal(|| None);

    // Load goals once the tracker is up
    use_effect(move || {
        if tracker_ready() {
            spawn(async move {
                let shared = tracker();
                let guard = shared.read().await;
                if let Some(ref trk) = *guard {
                    match trk.goals().list().await {
                        Ok(list) => goals.set(list),
                        // A failed fetch leaves the list empty but usable
                        Err(e) => tracing::warn!("Failed to load goals: {}", e),
                    }
                }
            });
        }
    });

    let delete_goal = move |id: GoalId| {
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                match trk.goals().delete(id).await {
                    Ok(()) => {
                        delete_error.set(None);
                        goals.with_mut(|list| {
                            remove_goal(list, id);
                        });
                    }
                    Err(e) => {
                        tracing::warn!("Failed to delete goal {}: {}", id, e);
                        delete_error.set(Some("Failed to delete the goal.".to_string()));
                    }
                }
            }
        });
    };

    rsx! {
        main { class: "home-screen page-with-tabs",
            Button {
                class: "add-goal".to_string(),
                onclick: move |_| {
                    navigator.push(Route::GoalNew {});
                },
                "+ Add Goal"
            }

            if let Some(message) = delete_error() {
                AlertBanner { message }
            }

            for goal in goals().into_iter() {
                {
                    let goal_id = goal.id;
                    rsx! {
                        GoalCard {
                            key: "{goal_id}",
                            goal,
                            on_delete: move |_| pending_delete.set(Some(goal_id)),
                        }
                    }
                }
            }

            ConfirmDialog {
                show: pending_delete().is_some(),
                title: "Delete Goal".to_string(),
                message: "Are you sure you want to delete this goal?".to_string(),
                on_confirm: move |_| {
                    if let Some(id) = pending_delete.take() {
                        delete_goal(id);
                    }
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
        TabBar { active: Tab::Home }
    }
}
