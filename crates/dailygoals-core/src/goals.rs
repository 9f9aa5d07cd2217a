//! Goal CRUD on top of the backend client
//!
//! Screens hold a plain `Vec<Goal>` and reconcile it only after the
//! backend confirms a mutation; nothing here mutates optimistically.
//! The service reads the auth phase (it never writes it) to stamp new
//! rows with the owning user.

use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::Backend;
use crate::error::{CoreError, CoreResult};
use crate::session::AuthPhase;
use crate::types::{Goal, GoalDraft, GoalId};

/// Goal operations for the current session
pub struct Goals {
    backend: Arc<Backend>,
    phase: watch::Receiver<AuthPhase>,
}

impl Goals {
    pub fn new(backend: Arc<Backend>, phase: watch::Receiver<AuthPhase>) -> Self {
        Self { backend, phase }
    }

    /// All of the user's goals, newest first
    pub async fn list(&self) -> CoreResult<Vec<Goal>> {
        self.backend.select_goals().await
    }

    /// One goal by id
    pub async fn fetch(&self, id: GoalId) -> CoreResult<Goal> {
        self.backend.select_goal(id).await
    }

    /// Create a goal owned by the signed-in user. Rejected before any
    /// request goes out when nobody is signed in.
    pub async fn create(&self, draft: &GoalDraft) -> CoreResult<Goal> {
        let owner_id = self
            .phase
            .borrow()
            .user()
            .map(|user| user.id.clone())
            .ok_or(CoreError::NotAuthenticated)?;
        self.backend.insert_goal(draft, &owner_id).await
    }

    /// Replace the editable fields of an existing goal
    pub async fn update(&self, id: GoalId, draft: &GoalDraft) -> CoreResult<Goal> {
        self.backend.update_goal(id, draft).await
    }

    /// Delete a goal. Callers drop it from their local list only after
    /// this returns `Ok`.
    pub async fn delete(&self, id: GoalId) -> CoreResult<()> {
        self.backend.delete_goal(id).await
    }
}

/// Drop exactly the goal with `id` from a rendered list, leaving the
/// order of the rest untouched. Returns whether anything was removed.
pub fn remove_goal(goals: &mut Vec<Goal>, id: GoalId) -> bool {
    let before = goals.len();
    goals.retain(|goal| goal.id != id);
    goals.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendConfig;
    use crate::dates::parse_date_input;
    use crate::types::{Priority, SessionUser};

    fn goal(id: i64, title: &str) -> Goal {
        Goal {
            id: GoalId(id),
            title: title.to_string(),
            description: String::new(),
            deadline: parse_date_input("2026-09-01").unwrap(),
            priority: Priority::Low,
            owner_id: "user-1".to_string(),
            created_at: parse_date_input("2026-08-01").unwrap(),
        }
    }

    fn draft() -> GoalDraft {
        GoalDraft {
            title: "Run 5k".to_string(),
            description: String::new(),
            deadline: parse_date_input("2026-09-01").unwrap(),
            priority: Priority::Low,
        }
    }

    // nothing listens on port 1, so any attempted request fails with a
    // transport error instead of NotAuthenticated
    fn goals_with_phase(phase: AuthPhase) -> Goals {
        let backend = Backend::new(BackendConfig {
            url: "http://127.0.0.1:1".to_string(),
            key: "anon".to_string(),
        })
        .unwrap();
        // the sender may drop; borrow() still reads the last value
        let (_tx, rx) = watch::channel(phase);
        Goals::new(Arc::new(backend), rx)
    }

    #[tokio::test]
    async fn test_create_without_session_is_rejected_before_sending() {
        let goals = goals_with_phase(AuthPhase::Unauthenticated);
        let err = goals.create(&draft()).await.unwrap_err();
        assert!(matches!(err, CoreError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_create_with_session_attempts_the_request() {
        let goals = goals_with_phase(AuthPhase::Authenticated(SessionUser {
            id: "user-1".to_string(),
            email: "a@b.co".to_string(),
            username: None,
        }));
        let err = goals.create(&draft()).await.unwrap_err();
        assert!(matches!(err, CoreError::Http(_)));
    }

    #[test]
    fn test_remove_goal_removes_exactly_one_id() {
        let mut list = vec![goal(3, "c"), goal(2, "b"), goal(1, "a")];
        assert!(remove_goal(&mut list, GoalId(2)));
        let ids: Vec<i64> = list.iter().map(|g| g.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_remove_goal_preserves_order() {
        let mut list = vec![goal(5, "e"), goal(4, "d"), goal(3, "c"), goal(2, "b")];
        remove_goal(&mut list, GoalId(4));
        let titles: Vec<&str> = list.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["e", "c", "b"]);
    }

    #[test]
    fn test_remove_goal_missing_id_leaves_list_unchanged() {
        let mut list = vec![goal(3, "c"), goal(2, "b")];
        let snapshot = list.clone();
        assert!(!remove_goal(&mut list, GoalId(99)));
        assert_eq!(list, snapshot);
    }
}
