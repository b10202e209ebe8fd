// Subject CRUD operations using Turso/libsql

use libsql::{params, Row};
use uuid::Uuid;

use super::client::{TursoClient, TursoError};
use crate::dictionary::{validate_title, Subject, SubjectError};

const SUBJECT_COLUMNS: &str = "id, owner_id, title, slug";

fn subject_from_row(row: &Row) -> Result<Subject, SubjectError> {
    let load = |e: libsql::Error| SubjectError::LoadError(e.to_string());
    Ok(Subject {
        id: row.get(0).map_err(load)?,
        owner_id: row.get(1).map_err(load)?,
        title: row.get(2).map_err(load)?,
        slug: row.get(3).map_err(load)?,
    })
}

impl TursoClient {
    /// Add a new subject for `owner_id`.
    ///
    /// The slug is derived from the title and must be unique per owner.
    pub async fn add_subject(&self, owner_id: &str, title: &str) -> Result<Subject, SubjectError> {
        let (title, slug) = validate_title(title).map_err(SubjectError::InvalidTitle)?;
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().to_rfc3339();

        self.execute(
            "INSERT INTO subject (id, owner_id, title, slug, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id.clone(), owner_id.to_string(), title.clone(), slug.clone(), created_at],
        )
        .await
        .map_err(|e| match e {
            TursoError::Constraint(_) => SubjectError::DuplicateSlug(slug.clone()),
            other => SubjectError::PersistenceError(other.to_string()),
        })?;

        crate::debug!("Added subject {} ({})", slug, id);
        Ok(Subject {
            id,
            owner_id: owner_id.to_string(),
            title,
            slug,
        })
    }

    /// Get a subject by ID.
    pub async fn get_subject(&self, id: &str) -> Result<Subject, SubjectError> {
        let mut rows = self
            .query(
                &format!("SELECT {} FROM subject WHERE id = ?1", SUBJECT_COLUMNS),
                params![id.to_string()],
            )
            .await
            .map_err(|e| SubjectError::LoadError(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| SubjectError::LoadError(e.to_string()))?
        {
            Some(row) => subject_from_row(&row),
            None => Err(SubjectError::NotFound(id.to_string())),
        }
    }

    /// Get one of the owner's subjects by slug.
    pub async fn get_subject_by_slug(
        &self,
        owner_id: &str,
        slug: &str,
    ) -> Result<Subject, SubjectError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {} FROM subject WHERE owner_id = ?1 AND slug = ?2",
                    SUBJECT_COLUMNS
                ),
                params![owner_id.to_string(), slug.to_string()],
            )
            .await
            .map_err(|e| SubjectError::LoadError(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| SubjectError::LoadError(e.to_string()))?
        {
            Some(row) => subject_from_row(&row),
            None => Err(SubjectError::NotFound(slug.to_string())),
        }
    }

    /// List the owner's subjects ordered by slug.
    pub async fn list_subjects(&self, owner_id: &str) -> Result<Vec<Subject>, SubjectError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {} FROM subject WHERE owner_id = ?1 ORDER BY slug",
                    SUBJECT_COLUMNS
                ),
                params![owner_id.to_string()],
            )
            .await
            .map_err(|e| SubjectError::LoadError(e.to_string()))?;

        let mut subjects = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| SubjectError::LoadError(e.to_string()))?
        {
            subjects.push(subject_from_row(&row)?);
        }
        Ok(subjects)
    }

    /// Rename a subject; the slug follows the new title.
    pub async fn update_subject(&self, id: &str, title: &str) -> Result<Subject, SubjectError> {
        let existing = self.get_subject(id).await?;
        let (title, slug) = validate_title(title).map_err(SubjectError::InvalidTitle)?;

        self.execute(
            "UPDATE subject SET title = ?1, slug = ?2 WHERE id = ?3",
            params![title.clone(), slug.clone(), id.to_string()],
        )
        .await
        .map_err(|e| match e {
            TursoError::Constraint(_) => SubjectError::DuplicateSlug(slug.clone()),
            other => SubjectError::PersistenceError(other.to_string()),
        })?;

        Ok(Subject {
            title,
            slug,
            ..existing
        })
    }

    /// Delete a subject and, by cascade, all its dictionaries.
    pub async fn delete_subject(&self, id: &str) -> Result<(), SubjectError> {
        let affected = self
            .execute("DELETE FROM subject WHERE id = ?1", params![id.to_string()])
            .await
            .map_err(|e| SubjectError::PersistenceError(e.to_string()))?;

        if affected == 0 {
            return Err(SubjectError::NotFound(id.to_string()));
        }
        crate::debug!("Deleted subject {}", id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "subject_test.rs"]
mod tests;
