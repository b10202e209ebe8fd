//! Storage backend traits for dictionaries.
//!
//! The staging editor only needs to load a dictionary and write it back, so
//! it depends on this trait rather than on a concrete database client.

use async_trait::async_trait;

use crate::dictionary::{Dictionary, DictionaryError};

/// Backend trait for persisted dictionaries.
///
/// Implementations of this trait provide the durable source of truth for a
/// dictionary's words. The primary implementation is TursoClient.
#[async_trait]
pub trait DictionaryStoreBackend: Send + Sync {
    /// Load a dictionary by ID.
    async fn load_dictionary(&self, id: &str) -> Result<Dictionary, DictionaryError>;

    /// Persist the dictionary's words as one record update.
    async fn save_dictionary(&self, dictionary: &Dictionary) -> Result<(), DictionaryError>;
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
