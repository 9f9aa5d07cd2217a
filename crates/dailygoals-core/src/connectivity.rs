//! Backend reachability probe
//!
//! Polls the auth service's health endpoint on a fixed interval and
//! publishes reachability over a watch channel. The UI swaps the whole
//! route tree for an offline notice while the backend is unreachable,
//! so the channel only notifies on actual transitions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::backend::Backend;

/// How often the health endpoint is probed
pub const PROBE_INTERVAL: Duration = Duration::from_secs(15);

/// Handle to the background reachability probe
pub struct Connectivity {
    online_rx: watch::Receiver<bool>,
}

impl Connectivity {
    /// Start probing. Reachability starts out `true` (the UI assumes
    /// online until told otherwise) and the first probe runs
    /// immediately. The probe task ends when the handle and all
    /// subscribers are gone.
    pub fn spawn(backend: Arc<Backend>, interval: Duration) -> Self {
        let (tx, online_rx) = watch::channel(true);
        tokio::spawn(async move {
            loop {
                let online = backend.health().await;
                let changed = tx.send_if_modified(|current| {
                    if *current == online {
                        return false;
                    }
                    *current = online;
                    true
                });
                if changed {
                    if online {
                        info!("backend reachable again");
                    } else {
                        warn!("backend unreachable");
                    }
                }
                tokio::time::sleep(interval).await;
                if tx.is_closed() {
                    break;
                }
            }
        });
        Self { online_rx }
    }

    /// Observe reachability transitions
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.online_rx.clone()
    }

    /// Last probed state
    pub fn is_online(&self) -> bool {
        *self.online_rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendConfig;

    #[tokio::test]
    async fn test_probe_flips_offline_when_unreachable() {
        // nothing listens on port 1, so the first probe fails fast
        let backend = Backend::new(BackendConfig {
            url: "http://127.0.0.1:1".to_string(),
            key: "anon".to_string(),
        })
        .unwrap();
        let conn = Connectivity::spawn(Arc::new(backend), Duration::from_millis(50));
        assert!(conn.is_online());

        let mut rx = conn.subscribe();
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("probe should report a transition")
            .unwrap();
        assert!(!*rx.borrow());
        assert!(!conn.is_online());
    }
}
