//! Form validation
//!
//! Pure field checks shared by the login, registration, and goal
//! screens. Each form type maps to an errors type with one optional
//! message per field; `None` means the field passed. Validation never
//! touches the network, so the UI can run it on every submit without
//! debouncing.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::types::{Goal, GoalDraft, Priority};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

// something@something.tld, no whitespace anywhere
fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn email_error(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !email_regex().is_match(email) {
        Some("Please enter a valid email".to_string())
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < 6 {
        Some("Password must be at least 6 characters".to_string())
    } else {
        None
    }
}

/// Login screen fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field login errors; `None` means the field is fine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// Login only checks that something was typed; whether the
    /// password is right is the backend's call.
    pub fn validate(&self) -> LoginErrors {
        LoginErrors {
            email: email_error(&self.email),
            password: if self.password.is_empty() {
                Some("Password is required".to_string())
            } else {
                None
            },
        }
    }
}

/// Registration screen fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field registration errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

impl RegisterForm {
    pub fn validate(&self) -> RegisterErrors {
        let username = {
            let trimmed = self.username.trim();
            if trimmed.is_empty() {
                Some("Username is required".to_string())
            } else if trimmed.chars().count() < 3 {
                Some("Username must be at least 3 characters".to_string())
            } else {
                None
            }
        };
        // checked independently of the password rules, so an empty
        // password with a filled confirm field flags both
        let confirm_password = if self.password != self.confirm_password {
            Some("Passwords do not match".to_string())
        } else {
            None
        };
        RegisterErrors {
            username,
            email: email_error(&self.email),
            password: password_error(&self.password),
            confirm_password,
        }
    }
}

/// Goal create/edit screen fields
///
/// `deadline` is `None` until the date input holds a parseable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: Priority,
}

/// Per-field goal errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalErrors {
    pub title: Option<String>,
    pub deadline: Option<String>,
}

impl GoalErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.deadline.is_none()
    }
}

impl GoalForm {
    /// Validate against the given calendar date so callers and tests
    /// agree on what "today" means.
    pub fn validate(&self, today: NaiveDate) -> GoalErrors {
        let trimmed = self.title.trim();
        let title = if trimmed.is_empty() {
            Some("Title is required".to_string())
        } else if trimmed.chars().count() < 3 {
            Some("Title must be at least 3 characters".to_string())
        } else {
            None
        };
        let deadline = match self.deadline {
            None => Some("Deadline is required".to_string()),
            Some(d) if d.date_naive() < today => Some("Deadline cannot be in the past".to_string()),
            Some(_) => None,
        };
        GoalErrors { title, deadline }
    }

    /// Build the backend payload. Returns `None` while the deadline is
    /// missing, so call only after `validate` comes back clean.
    pub fn to_draft(&self) -> Option<GoalDraft> {
        Some(GoalDraft {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            deadline: self.deadline?,
            priority: self.priority,
        })
    }

    /// Prefill for the edit screen
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            title: goal.title.clone(),
            description: goal.description.clone(),
            deadline: Some(goal.deadline),
            priority: goal.priority,
        }
    }
}
