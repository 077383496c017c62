use crate::{Appointment, AppointmentStatus, Prescription};

use chrono::NaiveDateTime;
use serde::Serialize;

/// How many items the dashboard previews per list.
pub const RECENT_ITEM_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_appointments: usize,
    pub upcoming_appointments: usize,
    pub completed_appointments: usize,
    pub active_prescriptions: usize,
}

impl DashboardStats {
    pub fn compute(
        appointments: &[Appointment],
        prescriptions: &[Prescription],
        now: NaiveDateTime,
    ) -> Self {
        Self {
            total_appointments: appointments.len(),
            upcoming_appointments: appointments.iter().filter(|a| a.is_upcoming(now)).count(),
            completed_appointments: appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count(),
            active_prescriptions: prescriptions.iter().filter(|p| p.is_active(now)).count(),
        }
    }
}

/// Health overview: counters plus the first few items of each list, in server order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_appointments: Vec<Appointment>,
    pub recent_prescriptions: Vec<Prescription>,
}

impl Dashboard {
    pub fn build(
        appointments: Vec<Appointment>,
        prescriptions: Vec<Prescription>,
        now: NaiveDateTime,
    ) -> Self {
        let stats = DashboardStats::compute(&appointments, &prescriptions, now);

        let mut recent_appointments = appointments;
        recent_appointments.truncate(RECENT_ITEM_COUNT);
        let mut recent_prescriptions = prescriptions;
        recent_prescriptions.truncate(RECENT_ITEM_COUNT);

        Self {
            stats,
            recent_appointments,
            recent_prescriptions,
        }
    }
}
