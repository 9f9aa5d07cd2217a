//! Session state and the auth gate
//!
//! The session is owned by the backend's auth service; the app only
//! ever sees a projection of it, modeled here as [`AuthPhase`]. The
//! [`Session`] service is the single writer of that phase: login,
//! registration, logout, and the startup restore all funnel through
//! it, and every other part of the app observes the phase through a
//! watch channel.
//!
//! Routing decisions live in [`gate`], a pure function from phase and
//! route group to a render outcome. Keeping it pure means the whole
//! reachability story is testable without a UI.
//!
//! # Example
//!
//! ```ignore
//! use dailygoals_core::{AuthPhase, Session};
//!
//! let session = Session::new(backend);
//! let mut phase_rx = session.subscribe();
//!
//! session.restore().await; // resolves Unknown one way or the other
//! assert!(phase_rx.borrow().resolved());
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::backend::{Backend, SignUpOutcome};
use crate::error::CoreResult;
use crate::types::SessionUser;

/// Where the app currently stands with the auth service
///
/// Starts at `Unknown` while the first session check is in flight and
/// resolves exactly once; after that the phase only moves between
/// `Authenticated` and `Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Session check still in flight; render nothing but a loading state
    #[default]
    Unknown,
    /// A user is signed in
    Authenticated(SessionUser),
    /// Nobody is signed in
    Unauthenticated,
}

impl AuthPhase {
    /// True once the initial session check has completed
    pub fn resolved(&self) -> bool {
        !matches!(self, AuthPhase::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Map a session-check result onto a phase. Errors read as signed
    /// out (fail closed) so the gate never hangs on `Unknown`.
    pub fn from_check(check: CoreResult<Option<SessionUser>>) -> Self {
        match check {
            Ok(Some(user)) => AuthPhase::Authenticated(user),
            Ok(None) | Err(_) => AuthPhase::Unauthenticated,
        }
    }
}

/// Which gate rules apply to a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    /// Welcome/login/register; hidden from signed-in users
    Public,
    /// Home, settings, goal screens; requires a signed-in user
    Protected,
    /// Rendered for anyone once the phase is resolved (e.g. not-found)
    Neutral,
}

/// What the router should do for the current phase and route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Phase not resolved yet; show the neutral loading indicator
    Loading,
    /// Route is allowed; render it
    Render,
    /// Signed-in user on a public route; send them home
    RedirectToHome,
    /// Signed-out user on a protected route; send them to login
    RedirectToLogin,
}

/// Decide the render outcome for a route group under the given phase.
///
/// Navigation is a side effect of the phase changing: callers re-run
/// this whenever the phase moves and act on the outcome, so there is
/// never a separate "navigate after login" call to keep in sync.
pub fn gate(phase: &AuthPhase, group: RouteGroup) -> GateOutcome {
    match (phase, group) {
        (AuthPhase::Unknown, _) => GateOutcome::Loading,
        (_, RouteGroup::Neutral) => GateOutcome::Render,
        (AuthPhase::Authenticated(_), RouteGroup::Protected) => GateOutcome::Render,
        (AuthPhase::Authenticated(_), RouteGroup::Public) => GateOutcome::RedirectToHome,
        (AuthPhase::Unauthenticated, RouteGroup::Public) => GateOutcome::Render,
        (AuthPhase::Unauthenticated, RouteGroup::Protected) => GateOutcome::RedirectToLogin,
    }
}

/// Single write owner for the auth phase
///
/// Holds the sending half of a watch channel; subscribers always see
/// the latest phase even if they attach after a transition, which
/// closes the race between the startup session check and the first
/// route render.
pub struct Session {
    backend: Arc<Backend>,
    phase_tx: watch::Sender<AuthPhase>,
}

impl Session {
    pub fn new(backend: Arc<Backend>) -> Self {
        let (phase_tx, _) = watch::channel(AuthPhase::Unknown);
        Self { backend, phase_tx }
    }

    /// Observe phase changes. The receiver starts at the current
    /// phase, not at `Unknown`.
    pub fn subscribe(&self) -> watch::Receiver<AuthPhase> {
        self.phase_tx.subscribe()
    }

    /// Snapshot of the current phase
    pub fn phase(&self) -> AuthPhase {
        self.phase_tx.borrow().clone()
    }

    /// Resolve the initial `Unknown` phase by asking the auth service
    /// who is signed in. Check failures read as signed out.
    pub async fn restore(&self) {
        if !self.backend.has_session_token() {
            self.publish(AuthPhase::Unauthenticated);
            return;
        }
        let check = self.backend.fetch_user().await;
        if let Err(ref err) = check {
            warn!("session check failed, treating as signed out: {err}");
        }
        self.publish(AuthPhase::from_check(check));
    }

    /// Sign in with email and password. On success the phase moves to
    /// `Authenticated`; on failure the error carries the backend's
    /// message for inline display.
    pub async fn login(&self, email: &str, password: &str) -> CoreResult<()> {
        match self.backend.sign_in(email, password).await {
            Ok(user) => {
                info!("signed in as user {}", user.id);
                self.publish(AuthPhase::Authenticated(user));
                Ok(())
            }
            Err(err) => {
                // a failed attempt still resolves the gate if it was pending
                if !self.phase().resolved() {
                    self.publish(AuthPhase::Unauthenticated);
                }
                Err(err)
            }
        }
    }

    /// Create an account. Returns `true` when the backend issued a
    /// session right away, `false` when it wants email confirmation
    /// first (in which case the phase is left alone).
    pub async fn register(&self, username: &str, email: &str, password: &str) -> CoreResult<bool> {
        match self.backend.sign_up(username, email, password).await? {
            SignUpOutcome::SignedIn(user) => {
                info!("registered and signed in as user {}", user.id);
                self.publish(AuthPhase::Authenticated(user));
                Ok(true)
            }
            SignUpOutcome::ConfirmationPending => {
                info!("registered; awaiting email confirmation");
                Ok(false)
            }
        }
    }

    /// Sign out. The phase flips locally before the revoke request so
    /// the gate closes even when the backend is unreachable.
    pub async fn logout(&self) {
        self.publish(AuthPhase::Unauthenticated);
        if let Err(err) = self.backend.sign_out().await {
            // local sign-out already happened; the token expires server-side
            warn!("sign-out request failed: {err}");
        }
    }

    fn publish(&self, next: AuthPhase) {
        self.phase_tx.send_if_modified(|phase| {
            // no path back to Unknown once a check has resolved
            if matches!(next, AuthPhase::Unknown) && phase.resolved() {
                return false;
            }
            if *phase == next {
                return false;
            }
            *phase = next;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendConfig;

    fn test_session() -> Session {
        let backend = Backend::new(BackendConfig {
            url: "http://127.0.0.1:54321".to_string(),
            key: "test-anon-key".to_string(),
        })
        .expect("backend builds");
        Session::new(Arc::new(backend))
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "user-1".to_string(),
            email: "a@b.co".to_string(),
            username: Some("abc".to_string()),
        }
    }

    #[test]
    fn test_starts_unknown() {
        let session = test_session();
        assert_eq!(session.phase(), AuthPhase::Unknown);
        assert!(!session.phase().resolved());
    }

    #[test]
    fn test_publish_resolves_and_never_returns_to_unknown() {
        let session = test_session();
        session.publish(AuthPhase::Authenticated(user()));
        assert!(session.phase().is_authenticated());

        session.publish(AuthPhase::Unknown);
        assert!(session.phase().is_authenticated());

        session.publish(AuthPhase::Unauthenticated);
        assert_eq!(session.phase(), AuthPhase::Unauthenticated);

        session.publish(AuthPhase::Unknown);
        assert_eq!(session.phase(), AuthPhase::Unauthenticated);
    }

    #[test]
    fn test_publish_same_phase_does_not_notify() {
        let session = test_session();
        let mut rx = session.subscribe();
        session.publish(AuthPhase::Unauthenticated);
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        session.publish(AuthPhase::Unauthenticated);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_late_subscriber_sees_current_phase() {
        let session = test_session();
        session.publish(AuthPhase::Authenticated(user()));
        // subscribing after the transition must not read Unknown
        let rx = session.subscribe();
        assert!(rx.borrow().is_authenticated());
    }

    #[test]
    fn test_from_check_fails_closed() {
        let err = crate::error::CoreError::NotAuthenticated;
        assert_eq!(AuthPhase::from_check(Err(err)), AuthPhase::Unauthenticated);
        assert_eq!(AuthPhase::from_check(Ok(None)), AuthPhase::Unauthenticated);
        assert_eq!(
            AuthPhase::from_check(Ok(Some(user()))),
            AuthPhase::Authenticated(user())
        );
    }

    #[test]
    fn test_gate_loading_only_while_unknown() {
        for group in [RouteGroup::Public, RouteGroup::Protected, RouteGroup::Neutral] {
            assert_eq!(gate(&AuthPhase::Unknown, group), GateOutcome::Loading);
            assert_ne!(
                gate(&AuthPhase::Unauthenticated, group),
                GateOutcome::Loading
            );
        }
    }

    #[test]
    fn test_gate_reachability() {
        let signed_in = AuthPhase::Authenticated(user());
        assert_eq!(gate(&signed_in, RouteGroup::Protected), GateOutcome::Render);
        assert_eq!(
            gate(&signed_in, RouteGroup::Public),
            GateOutcome::RedirectToHome
        );
        assert_eq!(
            gate(&AuthPhase::Unauthenticated, RouteGroup::Public),
            GateOutcome::Render
        );
        assert_eq!(
            gate(&AuthPhase::Unauthenticated, RouteGroup::Protected),
            GateOutcome::RedirectToLogin
        );
    }

    #[test]
    fn test_gate_neutral_renders_for_either_resolved_phase() {
        assert_eq!(
            gate(&AuthPhase::Authenticated(user()), RouteGroup::Neutral),
            GateOutcome::Render
        );
        assert_eq!(
            gate(&AuthPhase::Unauthenticated, RouteGroup::Neutral),
            GateOutcome::Render
        );
    }
}
