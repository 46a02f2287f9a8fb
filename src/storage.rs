//! Persistent store - saved accounts and theme, written through on every change

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::models::{Account, Theme};

/// Where the serialized record lives
pub trait StorageBackend: Send {
    /// Returns `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<String>>;
    /// Replace the stored record as a whole
    fn write(&self, contents: &str) -> Result<()>;
}

/// JSON file on disk. Writes go to a sibling temp file first and are renamed
/// into place so a crash mid-write never leaves a truncated record.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ExplorerError::PersistenceUnavailable(format!(
                "reading {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        let unavailable = |e: std::io::Error| {
            ExplorerError::PersistenceUnavailable(format!("writing {}: {}", self.path.display(), e))
        };

        self.ensure_dir().map_err(unavailable)?;
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path).map_err(unavailable)?;
            file.write_all(contents.as_bytes()).map_err(unavailable)?;
            file.sync_all().map_err(unavailable)?;
        }
        fs::rename(&tmp_path, &self.path).map_err(unavailable)?;
        Ok(())
    }
}

/// In-memory slot. Clones share the slot, so a test can drop a `Storage`
/// and load a new one from the same backend to simulate a restart.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        MemoryBackend {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| ExplorerError::PersistenceUnavailable(e.to_string()))
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| ExplorerError::PersistenceUnavailable(e.to_string()))?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}

/// On-disk shape of the record
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    #[serde(default)]
    saved_accounts: Vec<Account>,
    #[serde(default)]
    theme: Theme,
}

/// Saved accounts and theme. Every mutation persists the full record.
pub struct Storage {
    accounts: Vec<Account>,
    theme: Theme,
    backend: Box<dyn StorageBackend>,
}

impl Storage {
    /// Load from the backend, falling back to defaults when the record is
    /// missing, unreadable or malformed.
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let record = match backend.read() {
            Ok(Some(content)) => match serde_json::from_str::<StoredRecord>(&content) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored record is malformed, using defaults");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read storage, using defaults");
                None
            }
        };

        let (accounts, theme) = record
            .map(|r| (dedup_by_login(r.saved_accounts), r.theme))
            .unwrap_or_default();

        tracing::info!(accounts = accounts.len(), theme = theme.as_str(), "Storage loaded");

        Storage {
            accounts,
            theme,
            backend,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn get(&self, login: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.login == login)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Insert an account, replacing any entry with the same login.
    /// The new entry goes to the end.
    pub fn add_or_replace(&mut self, account: Account) {
        self.accounts.retain(|a| a.login != account.login);
        self.accounts.push(account);
        self.persist_logged();
    }

    /// Remove by login. Absent logins are a no-op.
    pub fn remove(&mut self, login: &str) {
        self.accounts.retain(|a| a.login != login);
        self.persist_logged();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.persist_logged();
    }

    /// Serialize and write the full record
    pub fn persist(&self) -> Result<()> {
        let record = StoredRecord {
            saved_accounts: self.accounts.clone(),
            theme: self.theme,
        };
        let content = serde_json::to_string_pretty(&record)
            .map_err(|e| ExplorerError::PersistenceUnavailable(e.to_string()))?;
        self.backend.write(&content)
    }

    // In-memory state stays authoritative for the session when the write fails
    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "Failed to persist storage");
        }
    }
}

// Last occurrence wins, matching add_or_replace semantics
fn dedup_by_login(accounts: Vec<Account>) -> Vec<Account> {
    let mut result: Vec<Account> = Vec::with_capacity(accounts.len());
    for account in accounts {
        result.retain(|a| a.login != account.login);
        result.push(account);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(login: &str, bio: &str) -> Account {
        let mut a = Account::new(login);
        a.bio = Some(bio.to_string());
        a
    }

    fn memory_storage() -> (Storage, MemoryBackend) {
        let backend = MemoryBackend::new();
        (Storage::load(Box::new(backend.clone())), backend)
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let (storage, _) = memory_storage();
        assert!(storage.is_empty());
        assert_eq!(storage.theme(), Theme::Dark);
    }

    #[test]
    fn test_add_or_replace_keeps_one_entry_per_login() {
        let (mut storage, _) = memory_storage();
        storage.add_or_replace(account("a", "first"));
        storage.add_or_replace(account("b", "b"));
        storage.add_or_replace(account("a", "second"));
        storage.add_or_replace(account("c", "c"));
        storage.add_or_replace(account("a", "third"));

        assert_eq!(storage.len(), 3);
        assert_eq!(storage.get("a").and_then(|a| a.bio.as_deref()), Some("third"));
        let logins: Vec<&str> = storage.accounts().iter().map(|a| a.login.as_str()).collect();
        assert_eq!(logins, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let (mut storage, _) = memory_storage();
        storage.add_or_replace(account("Octocat", "x"));
        storage.add_or_replace(account("octocat", "y"));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut storage, _) = memory_storage();
        storage.add_or_replace(account("a", ""));
        storage.add_or_replace(account("b", ""));
        storage.remove("a");
        let after_first: Vec<Account> = storage.accounts().to_vec();
        storage.remove("a");
        assert_eq!(storage.accounts(), after_first.as_slice());
        storage.remove("missing");
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let (mut storage, _) = memory_storage();
        let original = storage.theme();
        storage.toggle_theme();
        assert_ne!(storage.theme(), original);
        storage.toggle_theme();
        assert_eq!(storage.theme(), original);
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let (mut storage, backend) = memory_storage();
        assert!(backend.contents().is_none());
        storage.add_or_replace(account("a", ""));
        assert!(backend.contents().unwrap().contains("\"savedAccounts\""));
        storage.toggle_theme();
        assert!(backend.contents().unwrap().contains("\"light\""));
    }

    #[test]
    fn test_reload_round_trip() {
        let backend = MemoryBackend::new();
        {
            let mut storage = Storage::load(Box::new(backend.clone()));
            storage.add_or_replace(account("a", "bio a"));
            storage.add_or_replace(account("b", "bio b"));
            storage.toggle_theme();
        }

        let reloaded = Storage::load(Box::new(backend));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("a").and_then(|a| a.bio.as_deref()), Some("bio a"));
        assert_eq!(reloaded.get("b").and_then(|a| a.bio.as_deref()), Some("bio b"));
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn test_malformed_record_falls_back_to_defaults() {
        let backend = MemoryBackend::with_contents("{ not json");
        let storage = Storage::load(Box::new(backend));
        assert!(storage.is_empty());
        assert_eq!(storage.theme(), Theme::Dark);
    }

    #[test]
    fn test_stored_duplicates_are_collapsed() {
        let backend = MemoryBackend::with_contents(
            r#"{"savedAccounts":[{"login":"a","bio":"old"},{"login":"a","bio":"new"}],"theme":"light"}"#,
        );
        let storage = Storage::load(Box::new(backend));
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("a").and_then(|a| a.bio.as_deref()), Some("new"));
        assert_eq!(storage.theme(), Theme::Light);
    }

    /// Backend that can neither be read nor written
    struct Unavailable;

    impl StorageBackend for Unavailable {
        fn read(&self) -> Result<Option<String>> {
            Err(ExplorerError::PersistenceUnavailable("permission denied".into()))
        }

        fn write(&self, _contents: &str) -> Result<()> {
            Err(ExplorerError::PersistenceUnavailable("read-only file system".into()))
        }
    }

    #[test]
    fn test_unavailable_backend_keeps_session_state() {
        let mut storage = Storage::load(Box::new(Unavailable));
        assert!(storage.is_empty());
        assert_eq!(storage.theme(), Theme::Dark);

        storage.add_or_replace(account("octocat", "hi"));
        storage.add_or_replace(account("torvalds", "linux"));
        storage.toggle_theme();
        storage.remove("torvalds");

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("octocat").and_then(|a| a.bio.as_deref()), Some("hi"));
        assert_eq!(storage.theme(), Theme::Light);
        assert!(matches!(
            storage.persist(),
            Err(ExplorerError::PersistenceUnavailable(_))
        ));
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        {
            let mut storage = Storage::load(Box::new(FileBackend::new(&path)));
            storage.add_or_replace(account("octocat", "hi"));
        }
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let reloaded = Storage::load(Box::new(FileBackend::new(&path)));
        assert_eq!(reloaded.get("octocat").and_then(|a| a.bio.as_deref()), Some("hi"));
    }

    #[test]
    fn test_file_backend_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "garbage").unwrap();
        let storage = Storage::load(Box::new(FileBackend::new(&path)));
        assert!(storage.is_empty());
    }
}
