//! HTTP client for the backend-as-a-service provider
//!
//! Speaks the provider's two wire surfaces: the auth service under
//! `/auth/v1/` (sign-up, password grant, sign-out, user lookup) and
//! the tabular REST surface under `/rest/v1/` (the `goals` table).
//! Every request carries the project API key; once a user signs in,
//! their access token replaces the key as the bearer credential.
//!
//! The access token lives only in this struct for the lifetime of the
//! process. Nothing else in the app reads or stores it.

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};

mod auth;
mod goals;

pub use auth::SignUpOutcome;

/// Connection settings for the backend project
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Project API key (the public "anon" key)
    pub key: String,
}

impl BackendConfig {
    /// Load from `DAILYGOALS_API_URL` and `DAILYGOALS_API_KEY`.
    /// Returns `None` if either is missing.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("DAILYGOALS_API_URL").ok()?;
        let key = std::env::var("DAILYGOALS_API_KEY").ok()?;
        Some(Self { url, key })
    }
}

/// Shared HTTP client plus the current session credential
pub struct Backend {
    http: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: String,
    api_key: String,
    /// Bearer token for the signed-in user; `None` while signed out
    access_token: RwLock<Option<String>>,
}

impl Backend {
    pub fn new(config: BackendConfig) -> CoreResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.key,
            access_token: RwLock::new(None),
        })
    }

    /// Whether a sign-in during this process left us a token
    pub fn has_session_token(&self) -> bool {
        self.access_token.read().is_some()
    }

    pub(crate) fn store_token(&self, token: String) {
        *self.access_token.write() = Some(token);
    }

    pub(crate) fn clear_token(&self) {
        *self.access_token.write() = None;
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path)
    }

    /// Attach the project key and bearer credential. The user token
    /// wins when present; otherwise the key doubles as the bearer,
    /// which is what the provider expects from anonymous clients.
    pub(crate) fn with_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self
            .access_token
            .read()
            .clone()
            .unwrap_or_else(|| self.api_key.clone());
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {bearer}"))
    }

    /// Turn a non-success response into an [`CoreError::Api`],
    /// salvaging whatever message the body carries.
    pub(crate) async fn api_error(resp: reqwest::Response) -> CoreError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        debug!("backend error response {status}: {body}");
        CoreError::Api {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        }
    }
}

/// Best-effort extraction of a display message from an error body.
/// The auth service and the REST surface use different field names.
fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        msg: Option<String>,
        #[serde(default)]
        error_description: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message.or(e.msg).or(e.error_description).or(e.error))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_backend() -> Backend {
        Backend::new(BackendConfig {
            url: "http://127.0.0.1:54321/".to_string(),
            key: "anon-key".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_urls_normalize_trailing_slash() {
        let backend = test_backend();
        assert_eq!(
            backend.auth_url("token?grant_type=password"),
            "http://127.0.0.1:54321/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            backend.rest_url("goals?select=*"),
            "http://127.0.0.1:54321/rest/v1/goals?select=*"
        );
    }

    #[test]
    fn test_token_lifecycle() {
        let backend = test_backend();
        assert!(!backend.has_session_token());
        backend.store_token("jwt".to_string());
        assert!(backend.has_session_token());
        backend.clear_token();
        assert!(!backend.has_session_token());
    }

    #[test]
    fn test_error_message_auth_service_shape() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(400, body), "Invalid login credentials");

        let body = r#"{"code":400,"msg":"User already registered"}"#;
        assert_eq!(error_message(400, body), "User already registered");
    }

    #[test]
    fn test_error_message_rest_shape() {
        let body = r#"{"code":"PGRST116","details":null,"hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
        assert_eq!(
            error_message(406, body),
            "JSON object requested, multiple (or no) rows returned"
        );
    }

    #[test]
    fn test_error_message_fallback_on_garbage() {
        assert_eq!(
            error_message(502, "<html>bad gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(error_message(500, "{}"), "Request failed with status 500");
    }
}
