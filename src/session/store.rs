// Session store - ephemeral per-client key/value storage with a modified flag

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dictionary::Words;

/// Opaque session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error types for session operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Session was idle longer than the configured lifetime
    #[error("Session {0} has expired")]
    Expired(SessionId),
}

/// Key/value storage scoped to a client session.
///
/// Values are snapshots: `get` returns a copy and changes only become visible
/// to other readers after `set`. Implementations must tolerate unknown session
/// ids on writes by creating the session.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, session: &SessionId, key: &str) -> Result<Option<Words>, SessionError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, session: &SessionId, key: &str, value: Words) -> Result<(), SessionError>;

    /// Remove `key`. Returns whether a value was present.
    fn delete(&self, session: &SessionId, key: &str) -> Result<bool, SessionError>;

    /// Flag the session as modified so its state gets persisted.
    fn mark_dirty(&self, session: &SessionId) -> Result<(), SessionError>;
}

#[derive(Debug)]
struct SessionRecord {
    values: HashMap<String, Words>,
    modified: bool,
    last_access: DateTime<Utc>,
}

impl SessionRecord {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            values: HashMap::new(),
            modified: false,
            last_access: now,
        }
    }
}

/// In-process session store.
///
/// Sessions idle for longer than `ttl` expire; touching an expired session
/// drops it and reports [`SessionError::Expired`].
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<SessionId, SessionRecord>>,
    ttl: chrono::Duration,
}

impl MemorySessionStore {
    /// Create a store whose sessions expire after `ttl` of inactivity
    pub fn new(ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl)
            .unwrap_or_else(|_| chrono::Duration::weeks(52 * 100));
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Start a new empty session and return its id
    pub fn create_session(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .lock()
            .insert(id.clone(), SessionRecord::new(Utc::now()));
        crate::debug!("Created session {}", id);
        id
    }

    /// Drop a session and everything stored in it
    pub fn remove_session(&self, session: &SessionId) -> bool {
        self.sessions.lock().remove(session).is_some()
    }

    /// Whether the session has unacknowledged modifications
    pub fn is_modified(&self, session: &SessionId) -> bool {
        self.sessions
            .lock()
            .get(session)
            .map(|record| record.modified)
            .unwrap_or(false)
    }

    /// Read and reset the modified flag
    pub fn take_modified(&self, session: &SessionId) -> bool {
        self.sessions
            .lock()
            .get_mut(session)
            .map(|record| std::mem::take(&mut record.modified))
            .unwrap_or(false)
    }

    /// Keys currently stored in the session, sorted
    pub fn keys(&self, session: &SessionId) -> Vec<String> {
        let sessions = self.sessions.lock();
        let mut keys: Vec<String> = sessions
            .get(session)
            .map(|record| record.values.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Remove every expired session. Returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, record| !self.is_expired(record, now));
        let purged = before - sessions.len();
        if purged > 0 {
            crate::info!("Purged {} expired sessions", purged);
        }
        purged
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, record: &SessionRecord, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(record.last_access) > self.ttl
    }

    /// Run `f` against a live session record, creating it if `create` is set.
    ///
    /// Returns `Ok(None)` when the session does not exist and `create` is off.
    fn with_session<T>(
        &self,
        session: &SessionId,
        create: bool,
        f: impl FnOnce(&mut SessionRecord) -> T,
    ) -> Result<Option<T>, SessionError> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock();

        let expired = sessions
            .get(session)
            .map(|record| self.is_expired(record, now))
            .unwrap_or(false);
        if expired {
            sessions.remove(session);
            crate::debug!("Session {} expired", session);
            return Err(SessionError::Expired(session.clone()));
        }

        let record = if create {
            sessions
                .entry(session.clone())
                .or_insert_with(|| SessionRecord::new(now))
        } else {
            match sessions.get_mut(session) {
                Some(record) => record,
                None => return Ok(None),
            }
        };
        record.last_access = now;
        Ok(Some(f(record)))
    }
}

impl Default for MemorySessionStore {
    /// Two weeks, the usual lifetime of a browser session cookie
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::config::DEFAULT_SESSION_TTL_SECS))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session: &SessionId, key: &str) -> Result<Option<Words>, SessionError> {
        Ok(self
            .with_session(session, false, |record| record.values.get(key).cloned())?
            .flatten())
    }

    fn set(&self, session: &SessionId, key: &str, value: Words) -> Result<(), SessionError> {
        self.with_session(session, true, |record| {
            record.values.insert(key.to_string(), value);
        })?;
        Ok(())
    }

    fn delete(&self, session: &SessionId, key: &str) -> Result<bool, SessionError> {
        Ok(self
            .with_session(session, false, |record| record.values.remove(key).is_some())?
            .unwrap_or(false))
    }

    fn mark_dirty(&self, session: &SessionId) -> Result<(), SessionError> {
        self.with_session(session, true, |record| record.modified = true)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
