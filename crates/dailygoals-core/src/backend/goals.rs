//! REST calls against the `goals` table

use reqwest::StatusCode;
use serde_json::json;

use super::Backend;
use crate::error::{CoreError, CoreResult};
use crate::types::{Goal, GoalDraft, GoalId};

// Prefer/Accept values the tabular surface understands: ask for the
// mutated row back, and for exactly one object instead of an array.
const PREFER_REPRESENTATION: &str = "return=representation";
const ACCEPT_SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

fn list_query() -> String {
    "goals?select=*&order=created_at.desc".to_string()
}

fn single_query(id: GoalId) -> String {
    format!("goals?select=*&id=eq.{id}")
}

fn row_query(id: GoalId) -> String {
    format!("goals?id=eq.{id}")
}

fn draft_body(draft: &GoalDraft) -> serde_json::Value {
    json!({
        "title": draft.title,
        "description": draft.description,
        "deadline": draft.deadline,
        "priority": draft.priority,
    })
}

fn insert_body(draft: &GoalDraft, owner_id: &str) -> serde_json::Value {
    let mut body = draft_body(draft);
    body["user_id"] = json!(owner_id);
    body
}

impl Backend {
    /// All goals visible to the current session, newest first
    pub async fn select_goals(&self) -> CoreResult<Vec<Goal>> {
        let resp = self
            .with_auth(self.http.get(self.rest_url(&list_query())))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// One goal by row id
    pub async fn select_goal(&self, id: GoalId) -> CoreResult<Goal> {
        let resp = self
            .with_auth(self.http.get(self.rest_url(&single_query(id))))
            .header("Accept", ACCEPT_SINGLE_OBJECT)
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_ACCEPTABLE || resp.status() == StatusCode::NOT_FOUND {
            // single-object Accept turns "zero rows" into 406
            return Err(CoreError::GoalNotFound(id.0));
        }
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Insert a row for the given owner and return it as stored
    pub async fn insert_goal(&self, draft: &GoalDraft, owner_id: &str) -> CoreResult<Goal> {
        let resp = self
            .with_auth(self.http.post(self.rest_url("goals")))
            .header("Prefer", PREFER_REPRESENTATION)
            .header("Accept", ACCEPT_SINGLE_OBJECT)
            .json(&insert_body(draft, owner_id))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Overwrite the editable fields of a row and return the result
    pub async fn update_goal(&self, id: GoalId, draft: &GoalDraft) -> CoreResult<Goal> {
        let resp = self
            .with_auth(self.http.patch(self.rest_url(&row_query(id))))
            .header("Prefer", PREFER_REPRESENTATION)
            .header("Accept", ACCEPT_SINGLE_OBJECT)
            .json(&draft_body(draft))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_ACCEPTABLE || resp.status() == StatusCode::NOT_FOUND {
            return Err(CoreError::GoalNotFound(id.0));
        }
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Delete a row. Deleting an id that is already gone is not an
    /// error; the backend reports success for zero matched rows.
    pub async fn delete_goal(&self, id: GoalId) -> CoreResult<()> {
        let resp = self
            .with_auth(self.http.delete(self.rest_url(&row_query(id))))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date_input;
    use crate::types::Priority;

    fn draft() -> GoalDraft {
        GoalDraft {
            title: "Run 5k".to_string(),
            description: "around the park".to_string(),
            deadline: parse_date_input("2026-09-01").unwrap(),
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_list_query_orders_newest_first() {
        assert_eq!(list_query(), "goals?select=*&order=created_at.desc");
    }

    #[test]
    fn test_row_queries_filter_by_id() {
        assert_eq!(single_query(GoalId(7)), "goals?select=*&id=eq.7");
        assert_eq!(row_query(GoalId(7)), "goals?id=eq.7");
    }

    #[test]
    fn test_insert_body_includes_owner() {
        let body = insert_body(&draft(), "user-1");
        assert_eq!(body["title"], "Run 5k");
        assert_eq!(body["priority"], "medium");
        assert_eq!(body["user_id"], "user-1");
        // deadline travels as an ISO 8601 timestamp
        assert!(body["deadline"].as_str().unwrap().starts_with("2026-09-01T00:00:00"));
    }

    #[test]
    fn test_update_body_has_no_owner_field() {
        let body = draft_body(&draft());
        assert!(body.get("user_id").is_none());
        assert!(body.get("id").is_none());
        assert!(body.get("created_at").is_none());
    }
}
