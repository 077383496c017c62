use crate::{LoadResult, SessionRecord, SessionStore, StoreError, StoreResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session record kept in a single JSON file.
///
/// The file path is the store's key; every handle pointed at the same path
/// shares the one record.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record without repairing anything.
    ///
    /// Returns:
    /// - `Ok(LoadResult { record: Some(...), corruption_error: None })` - loaded successfully
    /// - `Ok(LoadResult { record: None, corruption_error: None })` - no file (logged out)
    /// - `Ok(LoadResult { record: None, corruption_error: Some(...) })` - file exists but corrupted
    /// - `Err(..)` - file exists but could not be read
    pub fn inspect(&self) -> StoreResult<LoadResult> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadResult::empty()),
            Err(e) => return Err(StoreError::file_read(self.path.clone(), e)),
        };

        Ok(SessionRecord::decode(&contents))
    }

    /// Moves a corrupted session file aside for debugging.
    ///
    /// Renames `session.json` to `session.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.sibling(&format!("corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| StoreError::backup_failed(self.path.clone(), e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }

    /// Gets an unusable record out of the way so the next load starts clean.
    fn discard(&self) {
        if let Err(e) = self.backup_corrupted() {
            warn!("{e}; removing the session file instead");
            if let Err(e) = fs::remove_file(&self.path)
                && e.kind() != ErrorKind::NotFound
            {
                warn!("Failed to remove unusable session file {:?}: {e}", self.path);
            }
        }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{suffix}"));
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

impl SessionStore for FileSessionStore {
    /// Saves the record using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, record: &SessionRecord) -> StoreResult<()> {
        if let Some(dir) = self.parent_dir() {
            fs::create_dir_all(dir).map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.sibling(&format!("tmp.{}", std::process::id()));

        // Pretty printing for debuggability
        let json = serde_json::to_string_pretty(record)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved session for user {}", record.identity.id);
        Ok(())
    }

    fn load(&self) -> Option<SessionRecord> {
        match self.inspect() {
            Ok(LoadResult {
                record: Some(record),
                ..
            }) => {
                info!(
                    "Loaded session for user {} (schema v{})",
                    record.identity.id, record.schema_version
                );
                Some(record)
            }
            Ok(LoadResult {
                corruption_error: Some(message),
                ..
            }) => {
                warn!("Session file corrupted at {:?}: {message}", self.path);
                self.discard();
                None
            }
            Ok(_) => {
                debug!("No session file at {:?}", self.path);
                None
            }
            Err(e) => {
                warn!("Treating unreadable session as logged out: {e}");
                self.discard();
                None
            }
        }
    }

    fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(self.path.clone(), e)),
        }
    }
}
