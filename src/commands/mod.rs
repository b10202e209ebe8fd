// Command layer - operations called by UI controllers and API handlers
// Commands return user-facing error strings so callers can display them as-is.

pub mod words;

use std::sync::Arc;

use crate::events::WordsEventEmitter;
use crate::session::SessionStore;
use crate::storage::DictionaryStoreBackend;

pub use words::{
    add_word, clear_words, confirm_words, delete_word, dictionary_words, discard_words,
    edit_words, refresh_words, run_words_action, to_user_error, ActionOutcome, WordForm,
    WordsAction,
};

/// Shared services the commands operate on
#[derive(Clone)]
pub struct AppState {
    /// Durable dictionary storage
    pub store: Arc<dyn DictionaryStoreBackend>,
    /// Per-client session storage holding staging areas
    pub sessions: Arc<dyn SessionStore>,
    /// Receives words_updated events
    pub emitter: Arc<dyn WordsEventEmitter>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DictionaryStoreBackend>,
        sessions: Arc<dyn SessionStore>,
        emitter: Arc<dyn WordsEventEmitter>,
    ) -> Self {
        Self {
            store,
            sessions,
            emitter,
        }
    }
}
