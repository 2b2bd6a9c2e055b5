//! Settings store abstraction.
//!
//! The settings form never touches the filesystem directly; it talks to a
//! [`SettingsStore`]. The host application decides where the values live:
//! [`FileSettingsStore`] persists them as a YAML document on disk, while
//! [`MemorySettingsStore`] keeps them in process for tests and for hosts
//! that bring their own persistence layer.
//!
//! Setters resolve only once the value is durably written, so callers can
//! sequence a commit as a series of `?`-propagated calls and know the
//! settings are on disk before they act on success.

use crate::settings::LanguageSettings;
use crate::tongue_map::TongueMap;
use anyhow::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keyed access to the persisted language settings.
///
/// Getters return owned snapshots; the maps involved are small and the
/// callers mutate their copies before writing them back. Setters take
/// `&self` since durable stores are internally synchronized.
pub trait SettingsStore: Send + Sync {
    /// The active provider id.
    fn language_provider(&self) -> String;

    /// The per-language font assignments, in stored order.
    fn languages(&self) -> TongueMap;

    /// The font descriptor table.
    fn alphabets(&self) -> BTreeMap<String, String>;

    /// Persist the active provider id.
    fn set_language_provider(&self, id: &str) -> Result<()>;

    /// Persist the per-language font assignments.
    fn set_languages(&self, languages: &TongueMap) -> Result<()>;

    /// Persist the font descriptor table.
    fn set_alphabets(&self, alphabets: &BTreeMap<String, String>) -> Result<()>;
}

/// File-backed settings store.
///
/// Holds the loaded document in memory and rewrites the whole file on every
/// setter call (atomic temp-file + rename via [`LanguageSettings::save_to_path`]).
pub struct FileSettingsStore {
    path: PathBuf,
    settings: RwLock<LanguageSettings>,
}

impl FileSettingsStore {
    /// Open the store at the default settings path, creating the default
    /// document if none exists.
    pub fn open_default() -> Result<Self> {
        Self::open(LanguageSettings::settings_path())
    }

    /// Open the store at an explicit path, creating the default document if
    /// none exists.
    pub fn open(path: PathBuf) -> Result<Self> {
        let settings = LanguageSettings::load_from_path(&path)?;
        Ok(Self {
            path,
            settings: RwLock::new(settings),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn write_through(&self, mutate: impl FnOnce(&mut LanguageSettings)) -> Result<()> {
        let mut settings = self.settings.write();
        let mut updated = settings.clone();
        mutate(&mut updated);
        // The cached copy only advances once the file write succeeded, so
        // a rejected write leaves getters serving the last durable state.
        updated.save_to_path(&self.path)?;
        *settings = updated;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn language_provider(&self) -> String {
        self.settings.read().language_provider.clone()
    }

    fn languages(&self) -> TongueMap {
        self.settings.read().languages.clone()
    }

    fn alphabets(&self) -> BTreeMap<String, String> {
        self.settings.read().alphabets.clone()
    }

    fn set_language_provider(&self, id: &str) -> Result<()> {
        self.write_through(|s| s.language_provider = id.to_string())
    }

    fn set_languages(&self, languages: &TongueMap) -> Result<()> {
        self.write_through(|s| s.languages = languages.clone())
    }

    fn set_alphabets(&self, alphabets: &BTreeMap<String, String>) -> Result<()> {
        self.write_through(|s| s.alphabets = alphabets.clone())
    }
}

/// In-memory settings store.
///
/// Used by the test suites and by hosts whose settings live in an external
/// system. Writes can be made to fail on demand to exercise commit-failure
/// paths.
#[derive(Default)]
pub struct MemorySettingsStore {
    settings: RwLock<LanguageSettings>,
    fail_writes: AtomicBool,
}

impl MemorySettingsStore {
    /// Create a store holding the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given settings.
    pub fn with_settings(settings: LanguageSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent setter call fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the current settings document.
    pub fn snapshot(&self) -> LanguageSettings {
        self.settings.read().clone()
    }

    fn write(&self, mutate: impl FnOnce(&mut LanguageSettings)) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("settings store rejected the write");
        }
        mutate(&mut self.settings.write());
        Ok(())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn language_provider(&self) -> String {
        self.settings.read().language_provider.clone()
    }

    fn languages(&self) -> TongueMap {
        self.settings.read().languages.clone()
    }

    fn alphabets(&self) -> BTreeMap<String, String> {
        self.settings.read().alphabets.clone()
    }

    fn set_language_provider(&self, id: &str) -> Result<()> {
        self.write(|s| s.language_provider = id.to_string())
    }

    fn set_languages(&self, languages: &TongueMap) -> Result<()> {
        self.write(|s| s.languages = languages.clone())
    }

    fn set_alphabets(&self, alphabets: &BTreeMap<String, String>) -> Result<()> {
        self.write(|s| s.alphabets = alphabets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_persists_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("languages.yaml");

        {
            let store = FileSettingsStore::open(path.clone()).unwrap();
            store.set_language_provider("module.chronicle").unwrap();
            let mut languages = TongueMap::new();
            languages.insert("common", "Signika");
            store.set_languages(&languages).unwrap();
        }

        let store = FileSettingsStore::open(path).unwrap();
        assert_eq!(store.language_provider(), "module.chronicle");
        assert_eq!(store.languages().get("common"), Some("Signika"));
    }

    #[test]
    fn memory_store_rejects_writes_on_demand() {
        let store = MemorySettingsStore::new();
        store.set_language_provider("native.chronicle").unwrap();

        store.set_fail_writes(true);
        assert!(store.set_language_provider("module.other").is_err());
        // The failed write left the previous value in place.
        assert_eq!(store.language_provider(), "native.chronicle");
    }
}
