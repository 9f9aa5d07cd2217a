//! Goal form - add and edit share one screen.

use dailygoals_core::{dates, GoalErrors, GoalForm, GoalId, Priority};
use dailygoals_ui::{AlertBanner, Button, ButtonVariant, Input, TextArea};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PriorityPicker;
use crate::context::{use_tracker, use_tracker_ready};

/// Add-goal route: the form with no prefill
#[component]
pub fn GoalNew() -> Element {
    rsx! {
        GoalFormScreen { id: None }
    }
}

/// Edit-goal route: the form prefilled from the stored goal
#[component]
pub fn GoalEdit(id: i64) -> Element {
    rsx! {
        GoalFormScreen { id: Some(id) }
    }
}

/// The shared form body
///
/// `id` decides the mode: `None` inserts, `Some` prefills the fields
/// from the backend and updates in place. Save only navigates home
/// after the backend confirms.
#[component]
fn GoalFormScreen(id: Option<i64>) -> Element {
    let tracker = use_tracker();
    let tracker_ready = use_tracker_ready();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut deadline_input = use_signal(dates::today_input);
    let mut priority = use_signal(Priority::default);
    let mut errors = use_signal(GoalErrors::default);
    let mut api_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Prefill when editing
    use_effect(move || {
        if let Some(goal_id) = id {
            if tracker_ready() {
                spawn(async move {
                    let shared = tracker();
                    let guard = shared.read().await;
                    if let Some(ref trk) = *guard {
                        match trk.goals().fetch(GoalId(goal_id)).await {
                            Ok(goal) => {
                                title.set(goal.title);
                                description.set(goal.description);
                                deadline_input.set(dates::to_date_input(&goal.deadline));
                                priority.set(goal.priority);
                            }
                            Err(e) => {
                                tracing::warn!("Failed to fetch goal {}: {}", goal_id, e);
                                api_error.set(Some(e.to_string()));
                            }
                        }
                    }
                });
            }
        }
    });

    let handle_submit = move |_| {
        let form = GoalForm {
            title: title(),
            description: description(),
            deadline: dates::parse_date_input(&deadline_input()),
            priority: priority(),
        };
        let found = form.validate(dates::today());
        let passed = found.is_empty();
        errors.set(found);
        if !passed {
            return;
        }
        let Some(draft) = form.to_draft() else {
            return;
        };

        submitting.set(true);
        api_error.set(None);
        spawn(async move {
            let shared = tracker();
            let guard = shared.read().await;
            if let Some(ref trk) = *guard {
                let result = match id {
                    Some(goal_id) => trk
                        .goals()
                        .update(GoalId(goal_id), &draft)
                        .await
                        .map(|_| ()),
                    None => trk.goals().create(&draft).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        navigator.push(Route::Home {});
                    }
                    Err(e) => {
                        tracing::warn!("Failed to save goal: {}", e);
                        api_error.set(Some(e.to_string()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        main { class: "form-screen",
            if let Some(message) = api_error() {
                AlertBanner { message }
            }

            Input {
                value: title(),
                oninput: move |s| title.set(s),
                label: "Goal Title".to_string(),
                placeholder: "Enter your goal".to_string(),
                error: errors().title,
            }

            TextArea {
                value: description(),
                oninput: move |s| description.set(s),
                label: "Description".to_string(),
                placeholder: "Describe your goal".to_string(),
            }

            div { class: "form-field",
                label { class: "input-label", r#for: "goal-deadline", "Deadline" }
                input {
                    id: "goal-deadline",
                    class: if errors().deadline.is_some() { "input-field input-error" } else { "input-field" },
                    r#type: "date",
                    min: dates::today_input(),
                    value: "{deadline_input}",
                    oninput: move |e| deadline_input.set(e.value()),
                }
                if let Some(error) = errors().deadline {
                    p { class: "field-error", role: "alert", "{error}" }
                }
            }

            div { class: "form-field",
                label { class: "input-label", "Priority" }
                PriorityPicker {
                    selected: priority(),
                    on_select: move |level| priority.set(level),
                }
            }

            Button {
                class: "form-submit".to_string(),
                disabled: submitting(),
                onclick: handle_submit,
                if id.is_some() { "Update Goal" } else { "Add Goal" }
            }
            Button {
                variant: ButtonVariant::Cancel,
                class: "form-cancel".to_string(),
                onclick: move |_| {
                    navigator.push(Route::Home {});
                },
                "Cancel"
            }
        }
    }
}
