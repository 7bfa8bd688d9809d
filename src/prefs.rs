//! Durable key-value preference store
//!
//! Holds the integers that survive a restart, addressed by string keys. The
//! store contract is deliberately infallible: absent keys read as zero, and
//! write failures are logged rather than surfaced (callers that want to react
//! can use [`FileStore::try_flush`]).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Key-value store for durable session stats
pub trait PrefStore {
    /// Read the integer stored under `key`, zero when absent
    fn get(&self, key: &str) -> u64;
    /// Stage `value` under `key`
    fn set(&mut self, key: &str, value: u64);
    /// Push staged values to durable storage
    fn flush(&mut self);
}

/// In-process store with no durability, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, u64>,
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> u64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}

/// Errors from the file store internals
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read/write preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preference file {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON-file-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, u64>,
}

impl FileStore {
    /// Open the store at `path`, starting fresh when the file is missing or
    /// unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(Some(values)) => {
                log::info!("Loaded {} preference entries", values.len());
                values
            }
            Ok(None) => {
                log::info!("No preference file found, starting fresh");
                BTreeMap::new()
            }
            Err(err) => {
                log::warn!("Ignoring unreadable preference file: {err}");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Write the current values to disk, reporting failures to the caller
    pub fn try_flush(&self) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(&self.values).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        write_text_atomic(&self.path, &json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> u64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        match self.try_flush() {
            Ok(()) => log::info!("Preferences saved ({} entries)", self.values.len()),
            Err(err) => log::warn!("Preference flush failed: {err}"),
        }
    }
}

/// Read the value table, `None` when the file does not exist
fn read_values(path: &Path) -> Result<Option<BTreeMap<String, u64>>, StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let values = serde_json::from_str(&json).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(values))
}

/// Write via a sibling tmp file plus rename, so a crash mid-write cannot
/// leave a truncated preference file behind
fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("prefs");
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    fs::write(&tmp_path, text)?;

    // Remove-then-rename keeps the swap working on Windows too
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
    }
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}
