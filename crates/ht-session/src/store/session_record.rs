use crate::LoadResult;

use ht_core::Identity;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Persisted form of the current identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub schema_version: u32,
    pub identity: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub saved_at: String,
}

impl SessionRecord {
    pub fn new(identity: Identity, token: Option<String>) -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            identity,
            token,
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Decode stored text. Undecodable text and foreign schema versions are corruption.
    pub(crate) fn decode(contents: &str) -> LoadResult {
        match serde_json::from_str::<SessionRecord>(contents) {
            Ok(record) if record.schema_version == SESSION_SCHEMA_VERSION => {
                LoadResult::found(record)
            }
            Ok(record) => LoadResult::corrupted(format!(
                "unsupported schema version {} (expected {SESSION_SCHEMA_VERSION})",
                record.schema_version
            )),
            Err(e) => LoadResult::corrupted(e.to_string()),
        }
    }
}
