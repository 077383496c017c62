use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE_NAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session record file, relative to the config directory
    pub file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file_name: String::from(DEFAULT_SESSION_FILE_NAME),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name = self.file_name.as_str();

        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(ConfigError::session(format!(
                "session.file_name must be a bare file name, got '{name}'"
            )));
        }

        Ok(())
    }
}
