//! Core types for Daily Goals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Unique identifier for a goal
///
/// Goals are numbered by the backend's identity column, so ids only
/// exist once a row has been inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub i64);

impl GoalId {
    /// Get the raw numeric id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Goal priority level
///
/// Stored on the wire as lowercase strings to match the backend's
/// text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities in ascending order, for pickers
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    /// Wire/storage representation, also used as a CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Human-readable picker label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(CoreError::InvalidPriority(other.to_string())),
        }
    }
}

/// Signed-in user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend account id (UUID string)
    pub id: String,
    /// Email the account was registered with
    pub email: String,
    /// Display name captured at registration, if any
    #[serde(default)]
    pub username: Option<String>,
}

/// Goal row as stored on the backend
///
/// `owner_id` is serialized as `user_id` to match the backend column;
/// row-level security keys off that column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Row id assigned by the backend
    pub id: GoalId,
    /// Short title, shown in lists
    pub title: String,
    /// Longer free-form description
    #[serde(default)]
    pub description: String,
    /// When the goal is due
    pub deadline: DateTime<Utc>,
    /// Priority level
    pub priority: Priority,
    /// Account that owns the row
    #[serde(rename = "user_id")]
    pub owner_id: String,
    /// When the row was inserted
    pub created_at: DateTime<Utc>,
}

/// Validated goal fields ready to be sent to the backend
///
/// Produced by [`crate::validate::GoalForm::to_draft`] after validation
/// passes; the backend fills in `id`, `user_id`, and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_wire_names() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
        // wire strings are lowercase only
        assert!("Low".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::Low.label(), "Low Priority");
        assert_eq!(Priority::Medium.label(), "Medium Priority");
        assert_eq!(Priority::High.label(), "High Priority");
    }

    #[test]
    fn test_priority_default_is_low() {
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn test_goal_from_backend_row() {
        let body = r#"{
            "id": 7,
            "title": "Ship the report",
            "description": "Final numbers for Q3",
            "deadline": "2026-09-01T00:00:00+00:00",
            "priority": "high",
            "user_id": "3e0a4b52-8a2f-4f6e-9b1a-0c5d2f7e8a91",
            "created_at": "2026-08-20T12:34:56.789012+00:00"
        }"#;
        let goal: Goal = serde_json::from_str(body).unwrap();
        assert_eq!(goal.id, GoalId(7));
        assert_eq!(goal.priority, Priority::High);
        assert_eq!(goal.owner_id, "3e0a4b52-8a2f-4f6e-9b1a-0c5d2f7e8a91");
    }

    #[test]
    fn test_goal_missing_description_defaults_empty() {
        let body = r#"{
            "id": 1,
            "title": "Untitled",
            "deadline": "2026-09-01T00:00:00Z",
            "priority": "low",
            "user_id": "abc",
            "created_at": "2026-08-20T00:00:00Z"
        }"#;
        let goal: Goal = serde_json::from_str(body).unwrap();
        assert_eq!(goal.description, "");
    }

    #[test]
    fn test_goal_serializes_owner_as_user_id() {
        let goal = Goal {
            id: GoalId(1),
            title: "t".to_string(),
            description: String::new(),
            deadline: Utc::now(),
            priority: Priority::Low,
            owner_id: "abc".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&goal).unwrap();
        assert!(value.get("user_id").is_some());
        assert!(value.get("owner_id").is_none());
    }

    #[test]
    fn test_session_user_without_username() {
        let body = r#"{"id": "abc", "email": "a@b.co"}"#;
        let user: SessionUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.username, None);
    }
}
