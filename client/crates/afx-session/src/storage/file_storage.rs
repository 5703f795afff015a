use crate::{SessionError, SessionResult, SessionStorage, TOKEN_KEY, USER_KEY};

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};

/// Distinguishes temp files of concurrent writers within one process
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Session storage backed by one JSON object file.
///
/// Both keys live in the same file, so a pair update is a single atomic
/// file replacement:
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> SessionResult<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(SessionError::file_read(self.path.clone(), e)),
        };

        serde_json::from_str(&contents).map_err(|e| {
            SessionError::corrupted(format!("{}: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::file_write(dir.to_path_buf(), e))?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.json".to_string());
        let temp_path = self.path.with_file_name(format!(
            "{file_name}.tmp.{}.{}",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        debug!("Wrote session storage {}", self.path.display());
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn get_pair(&self) -> SessionResult<(Option<String>, Option<String>)> {
        let mut entries = self.read_entries()?;
        Ok((entries.remove(TOKEN_KEY), entries.remove(USER_KEY)))
    }

    fn set_pair(&self, token: &str, user: &str) -> SessionResult<()> {
        // Corrupted contents are replaced rather than blocking a login
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(SessionError::Corrupted { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user.to_string());
        self.write_entries(&entries)
    }

    fn remove_pair(&self) -> SessionResult<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(SessionError::Corrupted { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);

        if entries.is_empty() {
            match fs::remove_file(&self.path) {
                Ok(()) => info!("Removed session storage {}", self.path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(SessionError::file_write(self.path.clone(), e)),
            }
            Ok(())
        } else {
            self.write_entries(&entries)
        }
    }
}
