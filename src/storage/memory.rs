//! In-process dictionary backend.
//!
//! Keeps dictionaries in a map; useful when no database is configured and
//! as a stand-in for TursoClient in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::DictionaryStoreBackend;
use crate::dictionary::{Dictionary, DictionaryError};

/// Dictionary backend holding records in memory
#[derive(Debug, Default)]
pub struct MemoryDictionaryStore {
    dictionaries: RwLock<HashMap<String, Dictionary>>,
}

impl MemoryDictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a whole dictionary record
    pub fn insert(&self, dictionary: Dictionary) {
        self.dictionaries
            .write()
            .insert(dictionary.id.clone(), dictionary);
    }

    /// Current copy of a dictionary, if present
    pub fn get(&self, id: &str) -> Option<Dictionary> {
        self.dictionaries.read().get(id).cloned()
    }
}

#[async_trait]
impl DictionaryStoreBackend for MemoryDictionaryStore {
    async fn load_dictionary(&self, id: &str) -> Result<Dictionary, DictionaryError> {
        self.get(id)
            .ok_or_else(|| DictionaryError::NotFound(id.to_string()))
    }

    async fn save_dictionary(&self, dictionary: &Dictionary) -> Result<(), DictionaryError> {
        let mut dictionaries = self.dictionaries.write();
        let stored = dictionaries
            .get_mut(&dictionary.id)
            .ok_or_else(|| DictionaryError::NotFound(dictionary.id.clone()))?;
        stored.words = dictionary.words.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
