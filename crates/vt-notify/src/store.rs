//! The key-value store port and its in-memory backend.

use rustc_hash::FxHashMap;

use crate::error::StoreResult;

/// Abstract persistence: string keys to opaque JSON values.
///
/// The engine does not assume a specific backing store — browser storage,
/// a database, or a file all fit behind this trait.  Implementations may
/// fail; the engine absorbs those failures (see crate docs).
pub trait KvStore {
    fn get(&self, key: &str) -> StoreResult<Option<serde_json::Value>>;
    fn set(&mut self, key: &str, value: serde_json::Value) -> StoreResult<()>;
    fn delete(&mut self, key: &str) -> StoreResult<()>;
}

/// The default backend: a plain in-process map.  Never fails.
///
/// "Durability" here is the process lifetime — the right trade for tests,
/// demos, and deployments that accept losing the inbox on restart.
#[derive(Default, Debug)]
pub struct MemoryStore {
    values: FxHashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<serde_json::Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> StoreResult<()> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
