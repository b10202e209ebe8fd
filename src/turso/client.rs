// Turso/libsql client - owns the embedded database connection
//
// All catalog tables live in a single local SQLite file managed through
// libsql. Query helpers translate libsql errors into TursoError so callers
// can tell constraint violations apart from other failures.

use std::path::{Path, PathBuf};

use libsql::params::IntoParams;
use libsql::{Builder, Connection, Database, Rows};
use thiserror::Error;

use crate::config::DEFAULT_DATABASE_FILE;

/// Errors from the database layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TursoError {
    /// Opening the database or a connection failed
    #[error("Database connection failed: {0}")]
    Connection(String),
    /// A statement failed to execute
    #[error("Query failed: {0}")]
    Query(String),
    /// A UNIQUE / FOREIGN KEY / NOT NULL constraint rejected the statement
    #[error("Constraint violation: {0}")]
    Constraint(String),
    /// A stored value could not be (de)serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl TursoError {
    fn from_libsql(error: libsql::Error) -> Self {
        let message = error.to_string();
        if message.contains("constraint failed") {
            TursoError::Constraint(message)
        } else {
            TursoError::Query(message)
        }
    }
}

/// Handle to the local libsql database
pub struct TursoClient {
    db_path: PathBuf,
    _database: Database,
    connection: Connection,
}

impl TursoClient {
    /// Open (or create) the database file in `data_dir`.
    pub async fn new(data_dir: PathBuf) -> Result<Self, TursoError> {
        Self::with_file_name(data_dir, DEFAULT_DATABASE_FILE).await
    }

    /// Open (or create) `file_name` inside `data_dir`.
    pub async fn with_file_name(data_dir: PathBuf, file_name: &str) -> Result<Self, TursoError> {
        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            TursoError::Connection(format!("Failed to create data dir {:?}: {}", data_dir, e))
        })?;

        let db_path = data_dir.join(file_name);
        crate::debug!("Opening Turso database at {:?}", db_path);

        let database = Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| TursoError::Connection(e.to_string()))?;
        let connection = database
            .connect()
            .map_err(|e| TursoError::Connection(e.to_string()))?;

        // Cascading deletes from subject to dictionary rely on this
        connection
            .execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| TursoError::Connection(e.to_string()))?;

        Ok(Self {
            db_path,
            _database: database,
            connection,
        })
    }

    /// Path of the database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, TursoError> {
        self.connection
            .execute(sql, params)
            .await
            .map_err(TursoError::from_libsql)
    }

    /// Run a query and return its rows.
    pub async fn query(&self, sql: &str, params: impl IntoParams) -> Result<Rows, TursoError> {
        self.connection
            .query(sql, params)
            .await
            .map_err(TursoError::from_libsql)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
