// Catalog records - subjects group dictionaries, dictionaries hold words
//
// Validation mirrors the form limits of the web UI: titles up to 30 characters,
// descriptions up to 150. Slugs are always derived from the title.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// Maximum length of a subject or dictionary title, in characters
pub const MAX_TITLE_LEN: usize = 30;

/// Maximum length of a dictionary description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 150;

/// Insertion-ordered `definition -> word` mapping.
///
/// Definitions are the unique key; the same word may appear under several
/// definitions.
pub type Words = IndexMap<String, String>;

/// A user-owned category grouping dictionaries (e.g. a language)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique identifier
    pub id: String,
    /// Opaque identifier of the owning user
    pub owner_id: String,
    pub title: String,
    /// Derived from `title`, unique per owner
    pub slug: String,
}

/// A named word list belonging to a subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    /// Unique identifier
    pub id: String,
    /// Owning subject
    pub subject_id: String,
    pub title: String,
    /// Derived from `title`, unique per subject
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Durable `definition -> word` mapping
    #[serde(default)]
    pub words: Words,
}

impl Dictionary {
    /// Key under which a session stages edits of this dictionary
    pub fn staging_key(&self) -> String {
        staging_key(&self.id)
    }
}

/// Session key for the staged words of the dictionary with the given id
pub fn staging_key(dictionary_id: &str) -> String {
    format!("dictionary_{}", dictionary_id)
}

/// Error types for subject operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubjectError {
    /// Subject not found
    #[error("Subject {0} not found")]
    NotFound(String),
    /// Another subject of the same owner already uses this slug
    #[error("Subject with slug '{0}' already exists")]
    DuplicateSlug(String),
    /// Title is empty, too long, or has no usable characters
    #[error("Invalid subject title: {0}")]
    InvalidTitle(String),
    /// Failed to persist the subject
    #[error("Failed to persist subject: {0}")]
    PersistenceError(String),
    /// Failed to load subjects
    #[error("Failed to load subjects: {0}")]
    LoadError(String),
}

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Dictionary not found
    #[error("Dictionary {0} not found")]
    NotFound(String),
    /// Another dictionary of the same subject already uses this slug
    #[error("Dictionary with slug '{0}' already exists")]
    DuplicateSlug(String),
    /// Title is empty, too long, or has no usable characters
    #[error("Invalid dictionary title: {0}")]
    InvalidTitle(String),
    /// Description is longer than allowed
    #[error("Invalid dictionary description: {0}")]
    InvalidDescription(String),
    /// Failed to persist the dictionary
    #[error("Failed to persist dictionary: {0}")]
    PersistenceError(String),
    /// Failed to load dictionaries
    #[error("Failed to load dictionary: {0}")]
    LoadError(String),
}

/// Checks a title and returns it trimmed together with its slug.
///
/// Returns the reason as a plain message so each record type can wrap it in
/// its own error.
pub fn validate_title(title: &str) -> Result<(String, String), String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!("title cannot exceed {} characters", MAX_TITLE_LEN));
    }
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(format!("title '{}' has no characters usable in a slug", title));
    }
    Ok((title.to_string(), slug))
}

/// Normalizes an optional description; blank descriptions become `None`.
pub fn validate_description(description: Option<String>) -> Result<Option<String>, DictionaryError> {
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    if let Some(ref d) = description {
        if d.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DictionaryError::InvalidDescription(format!(
                "description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
    }
    Ok(description)
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
