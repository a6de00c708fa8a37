//! Durable-slot storage contracts and implementations.
//!
//! # Responsibility
//! - Define the single-slot persistence contract for the task collection.
//! - Keep file-system and serialization details behind the storage boundary.
//!
//! # Invariants
//! - The slot holds one serialized JSON array of task records.
//! - A reader never observes a partially written slot.
//! - A missing slot is equivalent to an empty collection, not an error.

use crate::model::task::Task;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the durable slot inside the data directory.
const SLOT_FILE_NAME: &str = "tasks.json";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport and decoding errors at the storage boundary.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "invalid slot contents: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Storage contract for the task collection.
///
/// One slot, whole-collection granularity: `save` replaces everything the
/// slot held, `load` returns everything it holds. `Ok(None)` from `load`
/// means the slot has never been written.
pub trait TaskStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>>;
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}

/// File-backed slot: one JSON document at a fixed name inside a data
/// directory.
pub struct JsonSlotStorage {
    path: PathBuf,
}

impl JsonSlotStorage {
    /// Creates a slot rooted at `data_dir`. The directory is created on the
    /// first write, not here.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SLOT_FILE_NAME),
        }
    }

    /// Full path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonSlotStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let tasks = serde_json::from_str(&data)?;
        Ok(Some(tasks))
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(tasks)?;
        // Write-then-rename so a crash mid-write leaves the previous slot
        // contents intact.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-process slot used by tests and embedders that do not want disk I/O.
///
/// Stores the serialized document, so it exercises the same wire round-trip
/// as the file-backed slot.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        match self.slot.borrow().as_deref() {
            Some(data) => Ok(Some(serde_json::from_str(data)?)),
            None => Ok(None),
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let data = serde_json::to_string(tasks)?;
        *self.slot.borrow_mut() = Some(data);
        Ok(())
    }
}
