use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::storage::{Storage, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    cache: Arc<DashMap<String, Vec<Value>>>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<Value>>, StorageError> {
        Ok(self.cache.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, values: Vec<Value>) -> Result<(), StorageError> {
        self.cache.insert(key.to_string(), values);
        Ok(())
    }
}
