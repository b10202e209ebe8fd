//! Session storage for per-client scratch data.
//!
//! Sessions are keyed by an opaque [`SessionId`] and hold named [`Words`]
//! snapshots. Writers acknowledge every mutation with
//! [`SessionStore::mark_dirty`] so a persistence layer knows what to flush.
//!
//! [`Words`]: crate::dictionary::Words

mod store;

pub use store::{MemorySessionStore, SessionError, SessionId, SessionStore};
