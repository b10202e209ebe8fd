// Word list events for frontend notification
// Defines event payloads and emission trait for testability

use serde::Serialize;

/// Word list event names
pub mod words_events {
    pub const WORDS_UPDATED: &str = "words_updated";

    /// Payload for words_updated event
    #[derive(Debug, Clone, serde::Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct WordsUpdatedPayload {
        /// Type of change: "add", "delete", "clear", "refresh", "confirm" or "discard"
        pub action: String,
        /// ID of the dictionary whose staged words changed
        pub dictionary_id: String,
    }
}

pub use words_events::WordsUpdatedPayload;

/// Trait for emitting word list events
/// Allows mocking in tests while logging (or forwarding) in production
pub trait WordsEventEmitter: Send + Sync {
    /// Emit words_updated event
    fn emit_words_updated(&self, payload: WordsUpdatedPayload);
}

/// Emitter that writes events to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventEmitter;

impl LogEventEmitter {
    fn log_event<P: Serialize>(&self, event: &str, payload: &P) {
        match serde_json::to_string(payload) {
            Ok(json) => crate::info!("event {} {}", event, json),
            Err(e) => crate::warn!("Failed to serialize payload of event '{}': {}", event, e),
        }
    }
}

impl WordsEventEmitter for LogEventEmitter {
    fn emit_words_updated(&self, payload: WordsUpdatedPayload) {
        self.log_event(words_events::WORDS_UPDATED, &payload);
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
