// Word staging commands for the web UI and the JSON API
// Each command loads the dictionary, drives the staging editor, emits a
// words_updated event on success and maps errors to user-facing messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppState;
use crate::dictionary::{Dictionary, DictionaryError, Words};
use crate::events::WordsUpdatedPayload;
use crate::session::{SessionError, SessionId};
use crate::staging::{StagingError, WordPair, WordStagingEditor};

/// Maximum length of a word, in characters
pub const MAX_WORD_LEN: usize = 30;

/// Maximum length of a definition, in characters
pub const MAX_DEFINITION_LEN: usize = 60;

/// Input of the add-word form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordForm {
    pub word: String,
    pub definition: String,
}

impl WordForm {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// Check both fields are present and within length limits
    pub fn validate(&self) -> Result<(), String> {
        check_field("Word", &self.word, MAX_WORD_LEN)?;
        check_field("Definition", &self.definition, MAX_DEFINITION_LEN)
    }
}

fn check_field(name: &str, value: &str, max_len: usize) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} cannot be empty", name));
    }
    if value.chars().count() > max_len {
        return Err(format!("{} cannot exceed {} characters", name, max_len));
    }
    Ok(())
}

/// Word list management actions posted by the edit form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WordsAction {
    /// Empty the staged list
    Clear,
    /// Undo all staged changes
    Refresh,
    /// Remove one definition
    Delete,
    /// Save the staged list to the dictionary
    Confirm,
    /// Stop editing without saving
    Discard,
}

impl FromStr for WordsAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(WordsAction::Clear),
            "refresh" => Ok(WordsAction::Refresh),
            "delete" => Ok(WordsAction::Delete),
            "confirm" => Ok(WordsAction::Confirm),
            "discard" => Ok(WordsAction::Discard),
            _ => Err(format!("Unknown words action: {}", s)),
        }
    }
}

/// Result of a [`run_words_action`] call
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Editing continues; the staged words after the action
    Staged(Vec<WordPair>),
    /// The staged words were saved to the dictionary
    Committed(Dictionary),
    /// The staging area was dropped
    Discarded,
}

/// Map StagingError to user-friendly error messages
pub fn to_user_error(error: StagingError) -> String {
    match error {
        StagingError::DuplicateDefinition(_) => {
            "A definition with the same text already exists.".to_string()
        }
        StagingError::DefinitionNotFound(_) => {
            "There is no such definition in this session.".to_string()
        }
        StagingError::NotStaged(_) => {
            "This word list is not being edited anymore. Reload the page.".to_string()
        }
        StagingError::Session(SessionError::Expired(_)) => {
            "Your session has expired. Reload the page.".to_string()
        }
        StagingError::Persistence(e) => format!("Failed to save dictionary: {}", e),
    }
}

fn load_error(error: DictionaryError) -> String {
    match error {
        DictionaryError::NotFound(_) => "Dictionary not found".to_string(),
        other => format!("Failed to load dictionary: {}", other),
    }
}

async fn open_editor<'a>(
    state: &'a AppState,
    session: &SessionId,
    dictionary_id: &str,
) -> Result<WordStagingEditor<'a>, String> {
    let dictionary = state
        .store
        .load_dictionary(dictionary_id)
        .await
        .map_err(load_error)?;
    WordStagingEditor::open(state.sessions.as_ref(), session, dictionary).map_err(to_user_error)
}

fn emit_updated(state: &AppState, action: &str, dictionary_id: &str) {
    state.emitter.emit_words_updated(WordsUpdatedPayload {
        action: action.to_string(),
        dictionary_id: dictionary_id.to_string(),
    });
}

/// Persisted words of a dictionary, ignoring any staged edits
pub async fn dictionary_words(state: &AppState, dictionary_id: &str) -> Result<Words, String> {
    let dictionary = state
        .store
        .load_dictionary(dictionary_id)
        .await
        .map_err(load_error)?;
    Ok(dictionary.words)
}

/// Staged words of a dictionary, starting a staging area if needed
pub async fn edit_words(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
) -> Result<Vec<WordPair>, String> {
    let editor = open_editor(state, session, dictionary_id).await?;
    Ok(editor.get_words())
}

/// Add a word to the staged list
///
/// # Returns
/// The staged words after the addition
pub async fn add_word(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
    form: WordForm,
) -> Result<Vec<WordPair>, String> {
    form.validate()?;

    let mut editor = open_editor(state, session, dictionary_id).await?;
    editor
        .add_word(&form.word, &form.definition)
        .map_err(to_user_error)?;

    emit_updated(state, "add", dictionary_id);
    crate::info!("Staged word in dictionary {}: {}", dictionary_id, form.definition.trim());
    Ok(editor.get_words())
}

/// Remove a definition from the staged list
pub async fn delete_word(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
    definition: &str,
) -> Result<Vec<WordPair>, String> {
    let mut editor = open_editor(state, session, dictionary_id).await?;
    editor.remove_word(definition).map_err(to_user_error)?;

    emit_updated(state, "delete", dictionary_id);
    Ok(editor.get_words())
}

/// Empty the staged list
pub async fn clear_words(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
) -> Result<Vec<WordPair>, String> {
    let mut editor = open_editor(state, session, dictionary_id).await?;
    editor.clear_list().map_err(to_user_error)?;

    emit_updated(state, "clear", dictionary_id);
    Ok(editor.get_words())
}

/// Replace the staged list with the dictionary's saved words
pub async fn refresh_words(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
) -> Result<Vec<WordPair>, String> {
    let mut editor = open_editor(state, session, dictionary_id).await?;
    editor.refresh_list().map_err(to_user_error)?;

    emit_updated(state, "refresh", dictionary_id);
    Ok(editor.get_words())
}

/// Save the staged list to the dictionary and end editing
pub async fn confirm_words(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
) -> Result<Dictionary, String> {
    let editor = open_editor(state, session, dictionary_id).await?;
    let dictionary = editor
        .save_to_db(state.store.as_ref())
        .await
        .map_err(to_user_error)?;

    emit_updated(state, "confirm", dictionary_id);
    Ok(dictionary)
}

/// Drop the staged list without saving
pub async fn discard_words(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
) -> Result<(), String> {
    let editor = open_editor(state, session, dictionary_id).await?;
    editor.clear_session().map_err(to_user_error)?;

    emit_updated(state, "discard", dictionary_id);
    Ok(())
}

/// Perform a word list management action
///
/// `definition` is required for [`WordsAction::Delete`] and ignored otherwise.
pub async fn run_words_action(
    state: &AppState,
    session: &SessionId,
    dictionary_id: &str,
    action: WordsAction,
    definition: Option<&str>,
) -> Result<ActionOutcome, String> {
    match action {
        WordsAction::Clear => clear_words(state, session, dictionary_id)
            .await
            .map(ActionOutcome::Staged),
        WordsAction::Refresh => refresh_words(state, session, dictionary_id)
            .await
            .map(ActionOutcome::Staged),
        WordsAction::Delete => {
            let definition = definition.ok_or_else(|| "Definition is required".to_string())?;
            delete_word(state, session, dictionary_id, definition)
                .await
                .map(ActionOutcome::Staged)
        }
        WordsAction::Confirm => confirm_words(state, session, dictionary_id)
            .await
            .map(ActionOutcome::Committed),
        WordsAction::Discard => discard_words(state, session, dictionary_id)
            .await
            .map(|()| ActionOutcome::Discarded),
    }
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
