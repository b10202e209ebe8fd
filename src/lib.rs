// Personal vocabulary dictionaries with a session-scoped word staging editor.
//
// Words are edited in a per-session staging area and only written to the
// dictionary when the user confirms.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod app;
pub mod commands;
pub mod config;
pub mod dictionary;
pub mod events;
pub mod logging;
pub mod session;
pub mod staging;
pub mod storage;
pub mod turso;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use app::{build, App, SetupError};
pub use commands::AppState;
pub use config::AppConfig;
pub use dictionary::{Dictionary, DictionaryError, Subject, SubjectError, Words};
pub use session::{MemorySessionStore, SessionError, SessionId, SessionStore};
pub use staging::{StagingError, WordPair, WordStagingEditor};
pub use storage::{DictionaryStoreBackend, MemoryDictionaryStore};
pub use turso::{TursoClient, TursoError};
