pub mod appointment;
pub mod appointment_status;
pub mod client_date;
pub mod credentials;
pub mod dashboard;
pub mod identity;
pub mod new_appointment;
pub mod new_prescription;
pub mod prescription;
pub mod registration_profile;

use crate::{CoreError, CoreResult};

/// Required-field presence check shared by the input models.
///
/// Only emptiness is checked; formats are the server's business.
#[track_caller]
pub(crate) fn require_present(field: &'static str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    Ok(())
}
