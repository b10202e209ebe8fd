// Dictionary CRUD operations using Turso/libsql
//
// The word mapping is stored as a JSON object in `words_json`, keeping the
// insertion order of its entries.

use async_trait::async_trait;
use libsql::{params, Row};
use uuid::Uuid;

use super::client::{TursoClient, TursoError};
use crate::dictionary::{validate_description, validate_title, Dictionary, DictionaryError, Words};
use crate::storage::DictionaryStoreBackend;

const DICTIONARY_COLUMNS: &str = "id, subject_id, title, slug, description, words_json";

fn dictionary_from_row(row: &Row) -> Result<Dictionary, DictionaryError> {
    let load = |e: libsql::Error| DictionaryError::LoadError(e.to_string());
    let words_json: String = row.get(5).map_err(load)?;
    let words: Words = serde_json::from_str(&words_json)
        .map_err(|e| DictionaryError::LoadError(format!("Invalid words JSON: {}", e)))?;

    Ok(Dictionary {
        id: row.get(0).map_err(load)?,
        subject_id: row.get(1).map_err(load)?,
        title: row.get(2).map_err(load)?,
        slug: row.get(3).map_err(load)?,
        description: row.get(4).map_err(load)?,
        words,
    })
}

fn words_to_json(words: &Words) -> Result<String, DictionaryError> {
    serde_json::to_string(words).map_err(|e| {
        DictionaryError::PersistenceError(TursoError::Serialization(e.to_string()).to_string())
    })
}

impl TursoClient {
    /// Add a new, empty dictionary to a subject.
    ///
    /// The slug is derived from the title and must be unique within the subject.
    pub async fn add_dictionary(
        &self,
        subject_id: &str,
        title: &str,
        description: Option<String>,
    ) -> Result<Dictionary, DictionaryError> {
        let (title, slug) = validate_title(title).map_err(DictionaryError::InvalidTitle)?;
        let description = validate_description(description)?;
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().to_rfc3339();

        self.execute(
            r#"INSERT INTO dictionary
               (id, subject_id, title, slug, description, words_json, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, '{}', ?6)"#,
            params![
                id.clone(),
                subject_id.to_string(),
                title.clone(),
                slug.clone(),
                description.clone(),
                created_at
            ],
        )
        .await
        .map_err(|e| match e {
            // Either the slug is taken or the subject does not exist
            TursoError::Constraint(msg) if msg.contains("FOREIGN KEY") => {
                DictionaryError::PersistenceError(format!("Subject {} not found", subject_id))
            }
            TursoError::Constraint(_) => DictionaryError::DuplicateSlug(slug.clone()),
            other => DictionaryError::PersistenceError(other.to_string()),
        })?;

        crate::debug!("Added dictionary {} ({})", slug, id);
        Ok(Dictionary {
            id,
            subject_id: subject_id.to_string(),
            title,
            slug,
            description,
            words: Words::new(),
        })
    }

    /// Get a dictionary by ID.
    pub async fn get_dictionary(&self, id: &str) -> Result<Dictionary, DictionaryError> {
        let mut rows = self
            .query(
                &format!("SELECT {} FROM dictionary WHERE id = ?1", DICTIONARY_COLUMNS),
                params![id.to_string()],
            )
            .await
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?
        {
            Some(row) => dictionary_from_row(&row),
            None => Err(DictionaryError::NotFound(id.to_string())),
        }
    }

    /// Get one of the subject's dictionaries by slug.
    pub async fn get_dictionary_by_slug(
        &self,
        subject_id: &str,
        slug: &str,
    ) -> Result<Dictionary, DictionaryError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {} FROM dictionary WHERE subject_id = ?1 AND slug = ?2",
                    DICTIONARY_COLUMNS
                ),
                params![subject_id.to_string(), slug.to_string()],
            )
            .await
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?
        {
            Some(row) => dictionary_from_row(&row),
            None => Err(DictionaryError::NotFound(slug.to_string())),
        }
    }

    /// List the subject's dictionaries ordered by slug.
    pub async fn list_dictionaries(
        &self,
        subject_id: &str,
    ) -> Result<Vec<Dictionary>, DictionaryError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {} FROM dictionary WHERE subject_id = ?1 ORDER BY slug",
                    DICTIONARY_COLUMNS
                ),
                params![subject_id.to_string()],
            )
            .await
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;

        let mut dictionaries = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?
        {
            dictionaries.push(dictionary_from_row(&row)?);
        }
        Ok(dictionaries)
    }

    /// Update title and description; the slug follows the new title.
    ///
    /// Words are left alone; they only change through the staging editor.
    pub async fn update_dictionary(
        &self,
        id: &str,
        title: &str,
        description: Option<String>,
    ) -> Result<Dictionary, DictionaryError> {
        let existing = self.get_dictionary(id).await?;
        let (title, slug) = validate_title(title).map_err(DictionaryError::InvalidTitle)?;
        let description = validate_description(description)?;

        self.execute(
            "UPDATE dictionary SET title = ?1, slug = ?2, description = ?3 WHERE id = ?4",
            params![title.clone(), slug.clone(), description.clone(), id.to_string()],
        )
        .await
        .map_err(|e| match e {
            TursoError::Constraint(_) => DictionaryError::DuplicateSlug(slug.clone()),
            other => DictionaryError::PersistenceError(other.to_string()),
        })?;

        Ok(Dictionary {
            title,
            slug,
            description,
            ..existing
        })
    }

    /// Replace the stored words of a dictionary.
    pub async fn update_dictionary_words(
        &self,
        id: &str,
        words: &Words,
    ) -> Result<(), DictionaryError> {
        let words_json = words_to_json(words)?;
        let affected = self
            .execute(
                "UPDATE dictionary SET words_json = ?1 WHERE id = ?2",
                params![words_json, id.to_string()],
            )
            .await
            .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;

        if affected == 0 {
            return Err(DictionaryError::NotFound(id.to_string()));
        }
        crate::debug!("Stored {} words for dictionary {}", words.len(), id);
        Ok(())
    }

    /// Delete a dictionary by ID.
    pub async fn delete_dictionary(&self, id: &str) -> Result<(), DictionaryError> {
        let affected = self
            .execute("DELETE FROM dictionary WHERE id = ?1", params![id.to_string()])
            .await
            .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;

        if affected == 0 {
            return Err(DictionaryError::NotFound(id.to_string()));
        }
        crate::debug!("Deleted dictionary {}", id);
        Ok(())
    }
}

#[async_trait]
impl DictionaryStoreBackend for TursoClient {
    async fn load_dictionary(&self, id: &str) -> Result<Dictionary, DictionaryError> {
        self.get_dictionary(id).await
    }

    async fn save_dictionary(&self, dictionary: &Dictionary) -> Result<(), DictionaryError> {
        self.update_dictionary_words(&dictionary.id, &dictionary.words)
            .await
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
