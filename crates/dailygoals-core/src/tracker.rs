//! Main GoalTracker - the primary entry point for Daily Goals
//!
//! GoalTracker wires together the backend client, the session service,
//! goal CRUD, local preferences, and the reachability probe. The UI
//! constructs one tracker at startup and reaches everything through
//! its accessors.
//!
//! # Example
//!
//! ```ignore
//! use dailygoals_core::{BackendConfig, GoalTracker};
//!
//! let config = BackendConfig::from_env().expect("backend config");
//! let tracker = GoalTracker::new(config, "~/.local/share/dailygoals").await?;
//!
//! // Resolve the session one way or the other
//! tracker.session().restore().await;
//!
//! // Fetch the signed-in user's goals
//! let goals = tracker.goals().list().await?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::backend::{Backend, BackendConfig};
use crate::connectivity::{Connectivity, PROBE_INTERVAL};
use crate::error::CoreResult;
use crate::goals::Goals;
use crate::prefs::PrefsStore;
use crate::session::Session;

/// Main entry point for Daily Goals
///
/// Owns the session service (the one writer of the auth phase), the
/// goal service, preference storage, and the connectivity probe. All
/// methods take `&self`; the tracker is meant to sit behind a shared
/// handle for the app's lifetime.
pub struct GoalTracker {
    session: Session,
    goals: Goals,
    prefs: PrefsStore,
    connectivity: Connectivity,
    data_dir: PathBuf,
}

impl GoalTracker {
    /// Create a tracker with the given backend settings and local data
    /// directory.
    ///
    /// This will:
    /// - Create the data directory if it doesn't exist
    /// - Open the preference database
    /// - Start the background reachability probe (on the current
    ///   runtime, which is why this is `async`)
    pub async fn new(config: BackendConfig, data_dir: impl AsRef<Path>) -> CoreResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let prefs = PrefsStore::new(data_dir.join("dailygoals.redb"))?;
        let backend = Arc::new(Backend::new(config)?);
        let session = Session::new(backend.clone());
        let goals = Goals::new(backend.clone(), session.subscribe());
        let connectivity = Connectivity::spawn(backend, PROBE_INTERVAL);

        info!("goal tracker initialized, data dir {}", data_dir.display());
        Ok(Self {
            session,
            goals,
            prefs,
            connectivity,
            data_dir,
        })
    }

    /// Session service; the single writer of the auth phase
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Goal CRUD for the current session
    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Local theme / notification preferences
    pub fn prefs(&self) -> &PrefsStore {
        &self.prefs
    }

    /// Backend reachability
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
