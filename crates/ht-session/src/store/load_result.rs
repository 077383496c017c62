use crate::SessionRecord;

/// Result of inspecting the store - distinguishes "not found" from corruption.
#[derive(Debug)]
pub struct LoadResult {
    pub record: Option<SessionRecord>,
    /// Present if a record exists but could not be decoded
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub(crate) fn empty() -> Self {
        Self {
            record: None,
            corruption_error: None,
        }
    }

    pub(crate) fn found(record: SessionRecord) -> Self {
        Self {
            record: Some(record),
            corruption_error: None,
        }
    }

    pub(crate) fn corrupted(message: impl Into<String>) -> Self {
        Self {
            record: None,
            corruption_error: Some(message.into()),
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
