//! Storage abstraction layer for dictionaries.
//!
//! This module provides the backend interface the staging editor persists
//! through, along with an in-memory implementation. The database-backed
//! implementation lives on [`TursoClient`](crate::turso::TursoClient).

mod memory;
mod traits;

pub use memory::MemoryDictionaryStore;
pub use traits::DictionaryStoreBackend;
