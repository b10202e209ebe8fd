// Word staging editor - edits a session copy of a dictionary's words
//
// Lifecycle per (session, dictionary):
//   absent -> staged (copy of persisted words on first open)
//   staged -> staged (add / remove / clear / refresh)
//   staged -> absent (save_to_db commits, clear_session discards)
//
// Every mutation writes the whole snapshot back to the session store and
// marks the session dirty. A failed operation leaves the snapshot unchanged.

use crate::dictionary::{Dictionary, DictionaryError, Words};
use crate::session::{SessionError, SessionId, SessionStore};
use crate::storage::DictionaryStoreBackend;

/// A `(definition, word)` pair as listed by [`WordStagingEditor::get_words`]
pub type WordPair = (String, String);

/// Error types for staging operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StagingError {
    /// The staged words already contain this definition
    #[error("A word with the definition '{0}' already exists in this dictionary")]
    DuplicateDefinition(String),
    /// The staged words don't contain this definition
    #[error("There is no definition '{0}' in this session")]
    DefinitionNotFound(String),
    /// The session holds no staging area under this key
    #[error("Nothing staged under '{0}'")]
    NotStaged(String),
    /// The session store rejected the operation
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Writing the dictionary failed; staged words were kept
    #[error(transparent)]
    Persistence(#[from] DictionaryError),
}

/// Editable, session-bound copy of one dictionary's words.
///
/// Opening an editor either resumes the staging area already in the session
/// or creates it from the dictionary's persisted words. The dictionary record
/// itself is not touched until [`save_to_db`](Self::save_to_db).
pub struct WordStagingEditor<'a> {
    sessions: &'a dyn SessionStore,
    session: SessionId,
    dictionary: Dictionary,
    key: String,
    words: Words,
}

impl<'a> WordStagingEditor<'a> {
    /// Resolve the staging area for `(session, dictionary)`, creating it from
    /// the dictionary's words if the session has none yet.
    pub fn open(
        sessions: &'a dyn SessionStore,
        session: &SessionId,
        dictionary: Dictionary,
    ) -> Result<Self, StagingError> {
        let key = dictionary.staging_key();

        let words = match sessions.get(session, &key)? {
            Some(words) => words,
            None => {
                let words = dictionary.words.clone();
                sessions.set(session, &key, words.clone())?;
                sessions.mark_dirty(session)?;
                crate::debug!(
                    "Staged {} words of dictionary {} in session {}",
                    words.len(),
                    dictionary.id,
                    session
                );
                words
            }
        };

        Ok(Self {
            sessions,
            session: session.clone(),
            dictionary,
            key,
            words,
        })
    }

    /// Add a word under a new definition. Both are trimmed.
    pub fn add_word(&mut self, word: &str, definition: &str) -> Result<(), StagingError> {
        let word = word.trim();
        let definition = definition.trim();

        if self.words.contains_key(definition) {
            return Err(StagingError::DuplicateDefinition(definition.to_string()));
        }

        let mut words = self.words.clone();
        words.insert(definition.to_string(), word.to_string());
        self.replace(words)
    }

    /// Remove the word stored under `definition` (trimmed).
    pub fn remove_word(&mut self, definition: &str) -> Result<(), StagingError> {
        let definition = definition.trim();

        if !self.words.contains_key(definition) {
            return Err(StagingError::DefinitionNotFound(definition.to_string()));
        }

        let mut words = self.words.clone();
        words.shift_remove(definition);
        self.replace(words)
    }

    /// Staged pairs sorted by word, case-insensitively.
    ///
    /// The sort is stable, so pairs with equal words keep insertion order.
    pub fn get_words(&self) -> Vec<WordPair> {
        let mut pairs: Vec<WordPair> = self
            .words
            .iter()
            .map(|(definition, word)| (definition.clone(), word.clone()))
            .collect();
        pairs.sort_by_cached_key(|(_, word)| word.to_lowercase());
        pairs
    }

    /// Remove every staged word. The dictionary is not affected.
    pub fn clear_list(&mut self) -> Result<(), StagingError> {
        self.replace(Words::new())
    }

    /// Drop all staged changes by copying the dictionary's words again.
    pub fn refresh_list(&mut self) -> Result<(), StagingError> {
        self.replace(self.dictionary.words.clone())
    }

    /// Remove the staging area from the session without saving it.
    pub fn clear_session(self) -> Result<(), StagingError> {
        if !self.sessions.delete(&self.session, &self.key)? {
            return Err(StagingError::NotStaged(self.key));
        }
        self.sessions.mark_dirty(&self.session)?;
        crate::debug!("Discarded {} in session {}", self.key, self.session);
        Ok(())
    }

    /// Commit the staged words to the dictionary and end the staging area.
    ///
    /// Words are written in [`get_words`](Self::get_words) order. The session
    /// is only cleared after the store accepted the write; on failure the
    /// staging area stays in the session and the error is returned. Once the
    /// write succeeded the commit stands, even if the staging area was already
    /// gone (discarded elsewhere in the session, or the session expired).
    pub async fn save_to_db(
        self,
        store: &dyn DictionaryStoreBackend,
    ) -> Result<Dictionary, StagingError> {
        let mut dictionary = self.dictionary.clone();
        dictionary.words = self.get_words().into_iter().collect();

        store.save_dictionary(&dictionary).await?;
        crate::info!(
            "Saved {} words to dictionary {}",
            dictionary.words.len(),
            dictionary.id
        );

        match self.sessions.delete(&self.session, &self.key) {
            Ok(true) => {
                if let Err(e) = self.sessions.mark_dirty(&self.session) {
                    crate::warn!("Failed to mark session {} dirty: {}", self.session, e);
                }
            }
            Ok(false) => {
                crate::debug!("{} already left session {}", self.key, self.session);
            }
            Err(e) => {
                crate::debug!("Could not clear {} after commit: {}", self.key, e);
            }
        }
        Ok(dictionary)
    }

    /// The dictionary as loaded when the editor was opened
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The staged mapping in insertion order
    pub fn staged_words(&self) -> &Words {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the staged words differ from the dictionary's words
    pub fn has_changes(&self) -> bool {
        self.words != self.dictionary.words
    }

    /// Write `words` to the session, then adopt it locally.
    fn replace(&mut self, words: Words) -> Result<(), StagingError> {
        self.sessions.set(&self.session, &self.key, words.clone())?;
        self.sessions.mark_dirty(&self.session)?;
        self.words = words;
        Ok(())
    }
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;
