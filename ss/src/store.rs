//! Core in-memory store implementation

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::debug;

/// Mint a fresh record id
///
/// UUID v7 ids are time-ordered and collision-free under concurrent
/// callers, so two stores (or two threads on one store) never mint the
/// same id.
pub fn new_record_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// A record that can live in a [`Store`]
///
/// Records are append-only with respect to their own identity: the id is
/// set once at creation and never changes.
pub trait Record: Clone + Send + Sync {
    /// Unique identifier for this record
    fn id(&self) -> &str;
}

/// Errors raised by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record already exists: {0}")]
    DuplicateId(String),
}

/// Concurrency-safe in-memory registry of records keyed by id
///
/// Cloning the store clones the handle, not the contents - all clones
/// share the same underlying map.
pub struct Store<R: Record> {
    records: Arc<RwLock<HashMap<String, R>>>,
}

impl<R: Record> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Store<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, failing if its id is already present
    ///
    /// Insertion is atomic per entry: the check and the write happen
    /// under one lock, so concurrent inserts of distinct ids never race
    /// and concurrent inserts of the same id surface exactly one error.
    pub fn insert(&self, record: R) -> Result<(), StoreError> {
        let mut records = self.records.write().expect("store lock poisoned");
        let id = record.id().to_string();
        if records.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        debug!(%id, "store: inserted record");
        records.insert(id, record);
        Ok(())
    }

    /// Look up a record by id, returning a clone
    pub fn get(&self, id: &str) -> Option<R> {
        let records = self.records.read().expect("store lock poisoned");
        records.get(id).cloned()
    }

    /// Snapshot of all records
    ///
    /// Iteration order is unspecified; callers treat the result as a set.
    pub fn list(&self) -> Vec<R> {
        let records = self.records.read().expect("store lock poisoned");
        records.values().cloned().collect()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        let records = self.records.read().expect("store lock poisoned");
        records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
