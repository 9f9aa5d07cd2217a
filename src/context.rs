//! Tracker context for Daily Goals.
//!
//! Provides the GoalTracker instance to all components via use_context,
//! along with the reactive signals the app shell keeps mirrored from the
//! tracker's watch channels (auth phase, reachability) and local state
//! (theme).
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let tracker = use_tracker();
//! let phase = use_auth_phase();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dailygoals_core::{AuthPhase, BackendConfig, GoalTracker, ThemeMode};
use dioxus::prelude::*;
use tokio::sync::RwLock;

/// Shared tracker type for context.
///
/// The tracker is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - The init task to install it once construction finishes
pub type SharedTracker = Arc<RwLock<Option<GoalTracker>>>;

/// Tracker readiness flag.
///
/// Wrapped in a newtype because context lookup is keyed by type and the
/// app carries more than one boolean signal.
#[derive(Clone, Copy, PartialEq)]
pub struct TrackerReady(pub Signal<bool>);

/// Backend reachability flag, mirrored from the connectivity probe.
#[derive(Clone, Copy, PartialEq)]
pub struct OnlineStatus(pub Signal<bool>);

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the backend connection settings parsed at startup.
pub fn get_backend_config() -> BackendConfig {
    crate::get_backend_config()
}

/// Hook to access the GoalTracker from context.
///
/// Returns a Signal containing the shared tracker state.
///
/// # Example
///
/// ```ignore
/// let tracker = use_tracker();
///
/// // Call into a service
/// if let Some(ref trk) = *tracker.read().await {
///     let goals = trk.goals().list().await?;
/// }
/// ```
pub fn use_tracker() -> Signal<SharedTracker> {
    use_context::<Signal<SharedTracker>>()
}

/// Hook to check if the tracker is initialized.
pub fn use_tracker_ready() -> Signal<bool> {
    use_context::<TrackerReady>().0
}

/// Hook to observe the session phase.
///
/// The app shell forwards every phase transition from the session's
/// watch channel into this signal, so reading it subscribes the caller
/// to login/logout/restore changes.
pub fn use_auth_phase() -> Signal<AuthPhase> {
    use_context::<Signal<AuthPhase>>()
}

/// Hook to observe and set the active theme.
///
/// Writing the signal restyles the app immediately; persisting the
/// choice is the caller's job (see the settings screen).
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Hook to observe backend reachability.
pub fn use_online() -> Signal<bool> {
    use_context::<OnlineStatus>().0
}
