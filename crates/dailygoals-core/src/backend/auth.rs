//! Auth service calls: sign-up, password sign-in, sign-out, user lookup

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::Backend;
use crate::error::CoreResult;
use crate::types::SessionUser;

/// What the backend did with a sign-up request
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// Project has auto-confirm on; a session was issued immediately
    SignedIn(SessionUser),
    /// The backend sent a confirmation email; no session yet
    ConfirmationPending,
}

/// User object as the auth service returns it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form metadata captured at sign-up
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct UserMetadata {
    #[serde(default)]
    pub username: Option<String>,
}

impl From<ApiUser> for SessionUser {
    fn from(user: ApiUser) -> Self {
        SessionUser {
            id: user.id,
            email: user.email.unwrap_or_default(),
            username: user.user_metadata.username,
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: ApiUser,
}

// Sign-up answers with a session when the project auto-confirms, or
// with a bare user object when email confirmation is pending.
#[derive(Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<ApiUser>,
}

impl Backend {
    /// Create an account. The username travels as sign-up metadata and
    /// comes back on the user object for every later session.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> CoreResult<SignUpOutcome> {
        let resp = self
            .with_auth(self.http.post(self.auth_url("signup")))
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "username": username },
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let body: SignUpResponse = resp.json().await?;
        match (body.access_token, body.user) {
            (Some(token), Some(user)) => {
                self.store_token(token);
                Ok(SignUpOutcome::SignedIn(user.into()))
            }
            _ => {
                debug!("sign-up accepted, confirmation pending");
                Ok(SignUpOutcome::ConfirmationPending)
            }
        }
    }

    /// Password grant. On success the returned token becomes the
    /// bearer credential for everything that follows.
    pub async fn sign_in(&self, email: &str, password: &str) -> CoreResult<SessionUser> {
        let resp = self
            .with_auth(self.http.post(self.auth_url("token?grant_type=password")))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let body: TokenResponse = resp.json().await?;
        self.store_token(body.access_token);
        Ok(body.user.into())
    }

    /// Revoke the current session. The token is dropped locally before
    /// the request goes out, so a failed revoke still signs us out.
    pub async fn sign_out(&self) -> CoreResult<()> {
        let Some(token) = self.access_token.write().take() else {
            return Ok(());
        };
        let resp = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }

    /// Ask who the current token belongs to. `Ok(None)` means "nobody"
    /// (no token, or the backend no longer honors it); only transport
    /// and server faults surface as errors.
    pub async fn fetch_user(&self) -> CoreResult<Option<SessionUser>> {
        if !self.has_session_token() {
            return Ok(None);
        }
        let resp = self
            .with_auth(self.http.get(self.auth_url("user")))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED
            || resp.status() == reqwest::StatusCode::FORBIDDEN
        {
            debug!("session token rejected, clearing it");
            self.clear_token();
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let user: ApiUser = resp.json().await?;
        Ok(Some(user.into()))
    }

    /// Liveness probe against the auth service. Any failure reads as
    /// offline.
    pub async fn health(&self) -> bool {
        let resp = self
            .http
            .get(self.auth_url("health"))
            .header("apikey", &self.api_key)
            .send()
            .await;
        matches!(resp, Ok(r) if r.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_response_with_session() {
        let body = r#"{
            "access_token": "jwt-here",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": {"id": "u1", "email": "a@b.co", "user_metadata": {"username": "abc"}}
        }"#;
        let parsed: SignUpResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("jwt-here"));
        let user: SessionUser = parsed.user.unwrap().into();
        assert_eq!(user.username.as_deref(), Some("abc"));
    }

    #[test]
    fn test_sign_up_response_confirmation_pending() {
        // bare user object, no access_token at the top level
        let body = r#"{
            "id": "u1",
            "aud": "authenticated",
            "email": "a@b.co",
            "confirmation_sent_at": "2026-08-25T10:00:00Z"
        }"#;
        let parsed: SignUpResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.access_token.is_none());
        assert!(parsed.user.is_none());
    }

    #[test]
    fn test_token_response_parses() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "user": {"id": "u1", "email": "a@b.co", "user_metadata": {}}
        }"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "jwt");
        assert_eq!(parsed.user.id, "u1");
    }

    #[test]
    fn test_api_user_without_metadata() {
        let body = r#"{"id": "u1", "email": "a@b.co"}"#;
        let user: SessionUser = serde_json::from_str::<ApiUser>(body).unwrap().into();
        assert_eq!(user.email, "a@b.co");
        assert_eq!(user.username, None);
    }
}
