//! Session-scoped staging of dictionary words.
//!
//! Edits to a dictionary's word list happen in a per-session copy and only
//! reach the database when the user confirms them. See [`WordStagingEditor`].

mod editor;

pub use editor::{StagingError, WordPair, WordStagingEditor};
