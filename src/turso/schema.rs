// Database schema definitions and version tracking
//
// This module defines the SQLite schema for the subject and dictionary tables
// and records the schema version in its own table.

use super::client::{TursoClient, TursoError};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Subjects group dictionaries for one owner (e.g. a language)
    r#"CREATE TABLE IF NOT EXISTS subject (
        id TEXT PRIMARY KEY,
        owner_id TEXT NOT NULL,
        title TEXT NOT NULL,
        slug TEXT NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE (slug, owner_id)
    )"#,
    // Dictionaries with their definition -> word mapping stored as a JSON object
    r#"CREATE TABLE IF NOT EXISTS dictionary (
        id TEXT PRIMARY KEY,
        subject_id TEXT NOT NULL,
        title TEXT NOT NULL,
        slug TEXT NOT NULL,
        description TEXT,
        words_json TEXT NOT NULL DEFAULT '{}',
        created_at TEXT NOT NULL,
        UNIQUE (slug, subject_id),
        FOREIGN KEY (subject_id) REFERENCES subject(id) ON DELETE CASCADE
    )"#,
    // Index for listing the dictionaries of a subject
    r#"CREATE INDEX IF NOT EXISTS idx_dictionary_subject_id ON dictionary(subject_id)"#,
];

/// Initialize the database schema.
///
/// Creates all tables on a fresh database and records the schema version.
/// A database stamped with a newer version is left untouched.
/// This should be called once during application startup after TursoClient is created.
pub async fn initialize_schema(client: &TursoClient) -> Result<(), TursoError> {
    // First, ensure schema_version table exists (needed for version checking)
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        // Fresh database - create all tables
        crate::info!("Initializing Turso database schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }

        set_schema_version(client, SCHEMA_VERSION).await?;

        crate::info!("Turso database schema initialized successfully");
    } else if current_version > SCHEMA_VERSION {
        crate::warn!(
            "Turso database schema version {} is newer than supported version {}",
            current_version,
            SCHEMA_VERSION
        );
    } else {
        crate::debug!("Turso database schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 if no version has been recorded yet.
pub async fn get_schema_version(client: &TursoClient) -> Result<i32, TursoError> {
    let mut rows = client
        .query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='schema_version'",
            (),
        )
        .await?;

    if rows.next().await.map_err(|e| TursoError::Query(e.to_string()))?.is_none() {
        return Ok(0);
    }

    let mut rows = client
        .query("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1", ())
        .await?;

    match rows.next().await.map_err(|e| TursoError::Query(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| TursoError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(client: &TursoClient, version: i32) -> Result<(), TursoError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
