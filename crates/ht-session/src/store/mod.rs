pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod load_result;
pub(crate) mod memory_store;
pub(crate) mod session_record;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileSessionStore;
pub use load_result::LoadResult;
pub use memory_store::MemorySessionStore;
pub use session_record::{SESSION_SCHEMA_VERSION, SessionRecord};

/// Durable home of the single session record.
///
/// One shared record per client, last writer wins. `load` never fails:
/// a record that cannot be read or decoded is discarded and reported as
/// absent.
pub trait SessionStore: Send + Sync {
    fn save(&self, record: &SessionRecord) -> StoreResult<()>;

    fn load(&self) -> Option<SessionRecord>;

    /// Remove the record. Clearing an empty store succeeds.
    fn clear(&self) -> StoreResult<()>;
}
