use crate::{SessionRecord, SessionStore, StoreResult};

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;

/// In-process session store.
///
/// Holds the serialized text rather than the value so decoding behaves
/// exactly like the file store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `record`.
    pub fn with_record(record: &SessionRecord) -> StoreResult<Self> {
        let store = Self::new();
        store.save(record)?;
        Ok(store)
    }

    /// Replaces the slot with arbitrary text, decodable or not.
    pub fn corrupt_with(&self, raw: impl Into<String>) {
        *self.slot() = Some(raw.into());
    }

    /// The stored text, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.slot().is_none()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, record: &SessionRecord) -> StoreResult<()> {
        let json = serde_json::to_string(record)?;
        *self.slot() = Some(json);
        Ok(())
    }

    fn load(&self) -> Option<SessionRecord> {
        let mut slot = self.slot();
        let contents = slot.as_deref()?;

        let result = SessionRecord::decode(contents);
        if let Some(message) = result.corruption_error {
            warn!("Discarding corrupted in-memory session: {message}");
            *slot = None;
            return None;
        }

        result.record
    }

    fn clear(&self) -> StoreResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
