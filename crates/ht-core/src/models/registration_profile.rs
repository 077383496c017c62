use crate::CoreResult;
use crate::models::require_present;

use std::fmt;

use serde::Serialize;

/// Registration form payload.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationProfile {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl RegistrationProfile {
    pub fn validate(&self) -> CoreResult<()> {
        require_present("username", &self.username)?;
        require_present("email", &self.email)?;
        require_present("password", &self.password)?;
        require_present("firstName", &self.first_name)?;
        require_present("lastName", &self.last_name)?;
        require_present("phone", &self.phone)
    }
}

impl fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .finish()
    }
}
