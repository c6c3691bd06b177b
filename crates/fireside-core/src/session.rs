//! Ephemeral session store for cross-screen handoff
//!
//! The capture flow hands its recording (and later the upload response) to
//! the next screen through this store instead of threading large blobs
//! through navigation messages. Entries live for the process lifetime at
//! most and are consumed on read, mirroring the one-shot nature of the
//! handoff: a screen that finds its key missing redirects back to the step
//! that produces it.

use std::collections::HashMap;

/// Key under which the base64-encoded recording is handed off
pub const RECORDING_KEY: &str = "create-recording";

/// Key under which the opaque upload response is handed off
pub const UPLOAD_RESPONSE_KEY: &str = "upload-response";

/// In-process, single-owner key/value store
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<&'static str, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous one under the key
    pub fn put(&mut self, key: &'static str, value: String) {
        self.entries.insert(key, value);
    }

    /// Consume the value under `key`
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Whether a value is currently stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop everything, e.g. when a retry discards the pending recording
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes() {
        let mut store = SessionStore::new();
        store.put(RECORDING_KEY, "payload".to_string());
        assert!(store.contains(RECORDING_KEY));
        assert_eq!(store.take(RECORDING_KEY).as_deref(), Some("payload"));
        assert!(store.take(RECORDING_KEY).is_none());
    }

    #[test]
    fn test_put_replaces() {
        let mut store = SessionStore::new();
        store.put(UPLOAD_RESPONSE_KEY, "first".to_string());
        store.put(UPLOAD_RESPONSE_KEY, "second".to_string());
        assert_eq!(store.take(UPLOAD_RESPONSE_KEY).as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut store = SessionStore::new();
        store.put(RECORDING_KEY, "a".to_string());
        store.put(UPLOAD_RESPONSE_KEY, "b".to_string());
        store.clear();
        assert!(!store.contains(RECORDING_KEY));
        assert!(!store.contains(UPLOAD_RESPONSE_KEY));
    }
}
