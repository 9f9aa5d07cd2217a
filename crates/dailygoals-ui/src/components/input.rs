//! Input Field Components
//!
//! Text inputs and textareas for the auth and goal forms. Each field renders
//! a label, the control itself, and the validation message (if any) directly
//! underneath, with a red border on the control while the message is shown.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Validation message rendered under the field
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field with inline validation display
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         placeholder: "Enter your email".to_string(),
///         error: errors().email,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let input_class = input_classes(props.class.as_deref(), props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input for free-form descriptions
///
/// # Example
///
/// ```rust,ignore
/// let mut description = use_signal(String::new);
///
/// rsx! {
///     TextArea {
///         value: description(),
///         oninput: move |s| description.set(s),
///         label: "Description".to_string(),
///         placeholder: "Describe your goal".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("textarea-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Compose the control's class list from the extra classes and error state
fn input_classes(extra: Option<&str>, has_error: bool) -> String {
    let mut class = String::from("input-field");
    if has_error {
        class.push_str(" input-error");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Generate a simple random ID for label association
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos()
        % 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_classes_plain() {
        assert_eq!(input_classes(None, false), "input-field");
    }

    #[test]
    fn input_classes_with_error() {
        assert_eq!(input_classes(None, true), "input-field input-error");
    }

    #[test]
    fn input_classes_with_extra() {
        assert_eq!(
            input_classes(Some("welcome-input"), false),
            "input-field welcome-input"
        );
        assert_eq!(
            input_classes(Some("welcome-input"), true),
            "input-field input-error welcome-input"
        );
    }

    #[test]
    fn input_classes_ignores_empty_extra() {
        assert_eq!(input_classes(Some(""), false), "input-field");
    }

    #[test]
    fn rand_id_stays_in_range() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }
}
