//! Priority selection: the trigger row and the modal sheet.

use dailygoals_core::Priority;
use dioxus::prelude::*;

/// Properties for the PriorityPicker component
#[derive(Clone, PartialEq, Props)]
pub struct PriorityPickerProps {
    /// Currently selected priority
    pub selected: Priority,
    /// Handler called with the user's choice
    pub on_select: EventHandler<Priority>,
}

/// Priority field for the goal form
///
/// Renders a dot-and-label trigger tinted with the current level's
/// accent; tapping it opens a bottom sheet listing every level. Picking
/// one (or tapping outside the sheet) closes it.
#[component]
pub fn PriorityPicker(props: PriorityPickerProps) -> Element {
    let mut show_sheet = use_signal(|| false);
    let selected = props.selected;

    rsx! {
        button {
            class: "priority-selector priority-{selected.as_str()}",
            r#type: "button",
            onclick: move |_| show_sheet.set(true),
            span { class: "priority-dot priority-{selected.as_str()}" }
            "{selected.label()}"
        }
        if show_sheet() {
            div {
                class: "modal-overlay",
                onclick: move |_| show_sheet.set(false),
                div {
                    class: "modal-content",
                    onclick: move |e| e.stop_propagation(),
                    h3 { class: "modal-title", "Select Priority" }
                    for level in Priority::all().iter().copied() {
                        {
                            let is_selected = level == selected;
                            let class = if is_selected {
                                format!("priority-option priority-{} selected", level.as_str())
                            } else {
                                format!("priority-option priority-{}", level.as_str())
                            };
                            let on_select = props.on_select;
                            rsx! {
                                button {
                                    class: "{class}",
                                    r#type: "button",
                                    onclick: move |_| {
                                        on_select.call(level);
                                        show_sheet.set(false);
                                    },
                                    span { class: "priority-dot priority-{level.as_str()}" }
                                    "{level.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
