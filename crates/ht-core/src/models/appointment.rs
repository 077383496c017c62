use crate::{AppointmentStatus, parse_client_datetime};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub doctor_name: String,
    pub appointment_date: String,
    #[serde(default)]
    pub reason: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Scheduled and strictly in the future. Unparseable dates are never upcoming.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.status == AppointmentStatus::Scheduled
            && parse_client_datetime(&self.appointment_date).is_some_and(|at| at > now)
    }
}
