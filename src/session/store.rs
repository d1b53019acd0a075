use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::warn;

/// Persisted key layout. Booleans are string-encoded as `"true"`/`"false"`.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const AUTHENTICATED: &str = "isAuthenticated";
    pub const ADMIN: &str = "isAdmin";
    pub const ARTIST: &str = "isArtist";
    pub const AVATAR: &str = "userAvatar";
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no usable data directory on this platform")]
    NoDataDir,

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-level string storage for the session flags. The interface is
/// deliberately key-based rather than whole-state load/save: logout clears
/// the four account keys while leaving `theme` behind, and that asymmetry
/// has to stay observable.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `key=value` lines under the platform data dir. Every mutation rewrites
/// the file; writes are best-effort and only logged on failure, a lost write
/// degrades to defaults on the next startup.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "musicstream").ok_or(StoreError::NoDataDir)?;
        let dir = dirs.data_local_dir();
        fs::create_dir_all(dir)?;

        let path = dir.join("session");
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => HashMap::new(),
        };

        Ok(Self { path, entries })
    }

    fn parse(contents: &str) -> HashMap<String, String> {
        contents
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn flush(&self) {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();

        let mut out = String::new();
        for key in keys {
            out.push_str(key);
            out.push('=');
            out.push_str(&self.entries[key]);
            out.push('\n');
        }

        if let Err(e) = fs::write(&self.path, out) {
            warn!("failed to persist session state: {e}");
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get(keys::THEME), None);

        store.set(keys::THEME, "light");
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));

        store.remove(keys::THEME);
        assert_eq!(store.get(keys::THEME), None);
    }

    #[test]
    fn parse_reads_key_value_lines() {
        let entries = FileStore::parse("theme=light\nisAdmin=true\n");
        assert_eq!(entries.get("theme").map(String::as_str), Some("light"));
        assert_eq!(entries.get("isAdmin").map(String::as_str), Some("true"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn parse_keeps_equals_signs_inside_values() {
        let entries = FileStore::parse("userAvatar=https://cdn.example/a.png?w=80\n");
        assert_eq!(
            entries.get("userAvatar").map(String::as_str),
            Some("https://cdn.example/a.png?w=80")
        );
    }

    #[test]
    fn parse_skips_malformed_lines() {
        let entries = FileStore::parse("garbage\ntheme=dark\n");
        assert_eq!(entries.len(), 1);
    }
}
