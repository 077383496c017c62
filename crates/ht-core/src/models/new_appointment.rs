use crate::CoreResult;
use crate::models::require_present;

use serde::Serialize;

/// Booking request body for `POST /appointments/`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub user_id: i64,
    pub doctor_name: String,
    pub appointment_date: String,
    pub reason: String,
}

impl NewAppointment {
    pub fn validate(&self) -> CoreResult<()> {
        require_present("doctorName", &self.doctor_name)?;
        require_present("appointmentDate", &self.appointment_date)?;
        require_present("reason", &self.reason)
    }
}
