//! Token storage for quickchat.
//!
//! Stores the session token in `~/.quickchat/.credentials.json`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CONFIG_DIR;

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// Environment variable that overrides the stored token.
pub const ENV_TOKEN: &str = "QUICKCHAT_TOKEN";

/// Contents of the credentials file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredToken {
    /// Token sent verbatim in the `Authorization` header.
    pub token: Option<String>,
    /// When the token was saved, as a Unix timestamp.
    pub saved_at: Option<i64>,
}

impl StoredToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            saved_at: Some(chrono::Utc::now().timestamp()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Reads and writes the credentials file.
#[derive(Debug)]
pub struct TokenStore {
    credentials_path: PathBuf,
}

impl TokenStore {
    /// Store under the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::with_dir(home.join(CONFIG_DIR)))
    }

    /// Store inside `dir` (used by tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            credentials_path: dir.join(CREDENTIALS_FILE),
        }
    }

    pub fn credentials_path(&self) -> &PathBuf {
        &self.credentials_path
    }

    /// Load the stored token.
    ///
    /// A missing or unreadable file yields an empty record.
    pub fn load(&self) -> StoredToken {
        let file = match File::open(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return StoredToken::default(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Ignoring unreadable credentials file: {}", e);
                StoredToken::default()
            }
        }
    }

    /// Save a token, creating the directory if needed.
    ///
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, stored: &StoredToken) -> bool {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = match options.open(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return false,
        };
        // `mode` only applies on creation; tighten a file left by older runs.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if fs::set_permissions(&self.credentials_path, fs::Permissions::from_mode(0o600))
                .is_err()
            {
                return false;
            }
        }

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, stored).is_err() {
            return false;
        }

        writer.flush().is_ok()
    }

    /// Remove the credentials file.
    ///
    /// Returns `true` if successful or the file didn't exist.
    pub fn clear(&self) -> bool {
        if !self.credentials_path.exists() {
            return true;
        }
        fs::remove_file(&self.credentials_path).is_ok()
    }

    /// Token to use for this run: `override_token` (the environment) wins
    /// over the stored one. Blank values count as absent.
    pub fn resolve(&self, override_token: Option<String>) -> Option<String> {
        override_token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.load().token.filter(|t| !t.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> TokenStore {
        TokenStore::with_dir(dir.path().join(CONFIG_DIR))
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let stored = store(&dir).load();
        assert_eq!(stored, StoredToken::default());
        assert!(!stored.has_token());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.save(&StoredToken::new("jwt-abc")));
        assert!(store.credentials_path().exists());

        let loaded = store.load();
        assert_eq!(loaded.token.as_deref(), Some("jwt-abc"));
        assert!(loaded.saved_at.is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.credentials_path().parent().unwrap()).unwrap();
        fs::write(store.credentials_path(), "{}").unwrap();
        fs::set_permissions(store.credentials_path(), fs::Permissions::from_mode(0o644)).unwrap();

        assert!(store.save(&StoredToken::new("jwt")));
        let mode = fs::metadata(store.credentials_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.clear());
        store.save(&StoredToken::new("jwt"));
        assert!(store.clear());
        assert!(!store.credentials_path().exists());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.credentials_path().parent().unwrap()).unwrap();
        fs::write(store.credentials_path(), "garbage").unwrap();
        assert!(!store.load().has_token());
    }

    #[test]
    fn test_resolve_prefers_override() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&StoredToken::new("stored"));

        assert_eq!(store.resolve(Some("env".to_string())).as_deref(), Some("env"));
        assert_eq!(store.resolve(Some("  ".to_string())).as_deref(), Some("stored"));
        assert_eq!(store.resolve(None).as_deref(), Some("stored"));

        store.clear();
        assert!(store.resolve(None).is_none());
    }
}
