use crate::{ConfigError, ConfigErrorResult, DEFAULT_LANDING_PATH, DEFAULT_LOGIN_PATH};

use serde::Deserialize;

/// Paths the application's route table mounts regardless of configuration.
const FIXED_ROUTES: [&str; 4] = ["/", "/register", "/appointments", "/prescriptions"];

/// Navigation targets the route guards redirect to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Where unauthenticated visitors of protected pages are sent
    pub login_path: String,
    /// Where authenticated visitors of login/register are sent
    pub landing_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: String::from(DEFAULT_LOGIN_PATH),
            landing_path: String::from(DEFAULT_LANDING_PATH),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, value) in [
            ("routes.login_path", &self.login_path),
            ("routes.landing_path", &self.landing_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::routes(format!(
                    "{key} must start with '/', got '{value}'"
                )));
            }

            if value.contains(['?', '#']) {
                return Err(ConfigError::routes(format!(
                    "{key} must be a bare path without query or fragment, got '{value}'"
                )));
            }

            let path = canonical_path(value);
            if let Some(fixed) = FIXED_ROUTES.iter().find(|fixed| **fixed == path) {
                return Err(ConfigError::routes(format!(
                    "{key} '{value}' collides with the fixed route '{fixed}'"
                )));
            }
        }

        if canonical_path(&self.login_path) == canonical_path(&self.landing_path) {
            return Err(ConfigError::routes(
                "routes.login_path and routes.landing_path must differ",
            ));
        }

        Ok(())
    }
}

/// The form the router matches on: trailing `/` dropped, except for the root.
fn canonical_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
