//! Daily Goals Core Library
//!
//! Session gating, goal CRUD, and local preferences for the Daily
//! Goals desktop app.
//!
//! ## Overview
//!
//! Daily Goals is a thin client over a managed backend: authentication,
//! row storage, and per-user authorization all live server-side. What
//! this crate owns is the client's share of the work:
//!
//! - **Auth phase**: a tri-state session projection (`Unknown` /
//!   `Authenticated` / `Unauthenticated`) with one writer and
//!   watch-channel observers, plus the pure [`gate`] function that
//!   turns a phase and a route group into a render decision
//! - **Backend client**: typed calls against the provider's auth and
//!   tabular REST surfaces
//! - **Validation**: pure per-field checks for the login, registration,
//!   and goal forms
//! - **Preferences**: theme and notification-permission flags in a
//!   local redb database
//!
//! ## Quick Start
//!
//! ```ignore
//! use dailygoals_core::{BackendConfig, GoalTracker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BackendConfig::from_env().expect("backend config");
//!     let tracker = GoalTracker::new(config, "./data").await?;
//!
//!     tracker.session().restore().await;
//!     if tracker.session().phase().is_authenticated() {
//!         for goal in tracker.goals().list().await? {
//!             println!("{} (due {})", goal.title, goal.deadline);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod connectivity;
pub mod dates;
pub mod error;
pub mod goals;
pub mod prefs;
pub mod session;
pub mod tracker;
pub mod types;
pub mod validate;

// Re-exports
pub use backend::{Backend, BackendConfig, SignUpOutcome};
pub use connectivity::Connectivity;
pub use error::{CoreError, CoreResult};
pub use goals::{remove_goal, Goals};
pub use prefs::{PermissionStatus, PrefsStore, ThemeMode};
pub use session::{gate, AuthPhase, GateOutcome, RouteGroup, Session};
pub use tracker::GoalTracker;
pub use types::*;
pub use validate::{GoalErrors, GoalForm, LoginErrors, LoginForm, RegisterErrors, RegisterForm};
