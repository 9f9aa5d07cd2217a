//! Local preference storage using redb
//!
//! Holds exactly two things: the chosen theme and the
//! notification-permission answer. Goal data never lands here; the
//! backend is the only source of truth for domain rows.

use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use crate::error::CoreResult;

const PREFS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

const THEME_KEY: &str = "user-theme";
const NOTIFICATION_PERMISSION_KEY: &str = "notificationPermission";

/// Light/dark appearance choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Stored string back to a mode; anything unexpected reads as
    /// "never chosen"
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Class applied to the app root to scope the palette
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

/// Answer to the notification-permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "granted" => Some(PermissionStatus::Granted),
            "denied" => Some(PermissionStatus::Denied),
            _ => None,
        }
    }
}

/// Preference storage backed by a single redb table
#[derive(Clone)]
pub struct PrefsStore {
    db: Arc<RwLock<Database>>,
}

impl PrefsStore {
    /// Open (or create) the preference database at the given path,
    /// creating the parent directory when needed.
    pub fn new(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFS_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn put(&self, key: &str, value: &str) -> CoreResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// The saved theme choice, or `None` if the user never picked one
    pub fn theme(&self) -> CoreResult<Option<ThemeMode>> {
        Ok(self.get(THEME_KEY)?.as_deref().and_then(ThemeMode::parse))
    }

    pub fn set_theme(&self, mode: ThemeMode) -> CoreResult<()> {
        self.put(THEME_KEY, mode.as_str())
    }

    /// The recorded notification-permission answer, if any
    pub fn notification_permission(&self) -> CoreResult<Option<PermissionStatus>> {
        Ok(self
            .get(NOTIFICATION_PERMISSION_KEY)?
            .as_deref()
            .and_then(PermissionStatus::parse))
    }

    pub fn set_notification_permission(&self, status: PermissionStatus) -> CoreResult<()> {
        self.put(NOTIFICATION_PERMISSION_KEY, status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, PrefsStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = PrefsStore::new(dir.path().join("prefs.redb")).expect("Failed to open store");
        (dir, store)
    }

    #[test]
    fn test_theme_unset_by_default() {
        let (_dir, store) = temp_store();
        assert_eq!(store.theme().unwrap(), None);
    }

    #[test]
    fn test_theme_roundtrip() {
        let (_dir, store) = temp_store();
        store.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.theme().unwrap(), Some(ThemeMode::Dark));
        store.set_theme(ThemeMode::Light).unwrap();
        assert_eq!(store.theme().unwrap(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_theme_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.redb");
        {
            let store = PrefsStore::new(&path).unwrap();
            store.set_theme(ThemeMode::Dark).unwrap();
        }
        let store = PrefsStore::new(&path).unwrap();
        assert_eq!(store.theme().unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_unknown_stored_value_reads_as_unset() {
        let (_dir, store) = temp_store();
        store.put(THEME_KEY, "solarized").unwrap();
        assert_eq!(store.theme().unwrap(), None);
    }

    #[test]
    fn test_notification_permission_roundtrip() {
        let (_dir, store) = temp_store();
        assert_eq!(store.notification_permission().unwrap(), None);
        store
            .set_notification_permission(PermissionStatus::Granted)
            .unwrap();
        assert_eq!(
            store.notification_permission().unwrap(),
            Some(PermissionStatus::Granted)
        );
        store
            .set_notification_permission(PermissionStatus::Denied)
            .unwrap();
        assert_eq!(
            store.notification_permission().unwrap(),
            Some(PermissionStatus::Denied)
        );
    }

    #[test]
    fn test_theme_mode_toggles() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_css_class() {
        assert_eq!(ThemeMode::Light.css_class(), "theme-light");
        assert_eq!(ThemeMode::Dark.css_class(), "theme-dark");
    }
}
