//! Record store abstraction.
//!
//! The persistence primitive is deliberately small: a durable mapping from a
//! collection name to an ordered sequence of JSON records, with get-all and
//! replace-all as the only operations. There are no transactions across
//! collections and no partial writes within one `write_all` call; every
//! cascade in [`ops`] is a sequence of independent read-modify-write steps
//! over this trait.
//!
//! [`ops`]: crate::ops

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;
use thiserror::Error;

/// The named record collections the engine reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Trips,
    ItineraryEntries,
    Budgets,
    Spends,
    Hotels,
    Transports,
    PackingLists,
}

impl Collection {
    /// Returns the canonical collection name used by store backends.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trips => "trips",
            Self::ItineraryEntries => "itinerary_entries",
            Self::Budgets => "budgets",
            Self::Spends => "spends",
            Self::Hotels => "hotels",
            Self::Transports => "transports",
            Self::PackingLists => "packing_lists",
        }
    }
}

/// Store backend errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt record in \"{collection}\": {message}")]
    Corrupt {
        collection: &'static str,
        message: String,
    },
    #[error("store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The only I/O seam of the engine.
///
/// `read_all` of an unknown collection yields an empty sequence; `write_all`
/// replaces the whole collection or fails without effect.
pub trait RecordStore: Send + Sync {
    fn read_all(&self, collection: Collection) -> StoreResult<Vec<Value>>;
    fn write_all(&self, collection: Collection, records: Vec<Value>) -> StoreResult<()>;
}

/// In-memory store, the default for tests and the `memory` settings value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn read_all(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        let collections = self.collections.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    fn write_all(&self, collection: Collection, records: Vec<Value>) -> StoreResult<()> {
        let mut collections = self.collections.lock().map_err(|_| StoreError::Poisoned)?;
        collections.insert(collection, records);
        Ok(())
    }
}

/// One `<name>.json` file per collection inside a directory.
///
/// A missing file reads as an empty collection. Writes go through a sibling
/// temp file followed by a rename, so a crashed write leaves the previous
/// file intact.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.as_str()))
    }
}

impl RecordStore for JsonFileStore {
    fn read_all(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        let path = self.path_for(collection);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_slice(&raw).map_err(|err| StoreError::Corrupt {
            collection: collection.as_str(),
            message: err.to_string(),
        })
    }

    fn write_all(&self, collection: Collection, records: Vec<Value>) -> StoreResult<()> {
        let raw = serde_json::to_vec_pretty(&records).map_err(|err| StoreError::Corrupt {
            collection: collection.as_str(),
            message: err.to_string(),
        })?;
        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
