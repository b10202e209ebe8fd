//! Turso/libsql persistence for subjects and dictionaries.
//!
//! [`TursoClient`] owns the local database connection; CRUD operations are
//! added to it per record type, and it implements
//! [`DictionaryStoreBackend`](crate::storage::DictionaryStoreBackend) for the
//! staging editor.

mod client;
mod dictionary;
mod schema;
mod subject;

pub use client::{TursoClient, TursoError};
pub use schema::{get_schema_version, initialize_schema, SCHEMA_VERSION};
