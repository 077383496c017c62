use crate::tests::fixed_now;
use crate::{Appointment, AppointmentStatus, Dashboard, DashboardStats, Prescription};

fn appointment(id: i64, date: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        user_id: Some(1),
        doctor_name: format!("Dr. {id}"),
        appointment_date: date.into(),
        reason: "Checkup".into(),
        status,
    }
}

fn prescription(id: i64, end_date: &str) -> Prescription {
    Prescription {
        id,
        user_id: Some(1),
        medicine_name: format!("Medicine {id}"),
        dosage: "10mg".into(),
        frequency: "daily".into(),
        start_date: "2024-01-01".into(),
        end_date: end_date.into(),
    }
}

#[test]
fn given_mixed_appointments_when_compute_then_counts_by_status_and_date() {
    let appointments = vec![
        appointment(1, "2024-07-01T10:00", AppointmentStatus::Scheduled),
        appointment(2, "2024-05-01T10:00", AppointmentStatus::Scheduled),
        appointment(3, "2024-04-01T10:00", AppointmentStatus::Completed),
        appointment(4, "2024-08-01T10:00", AppointmentStatus::Cancelled),
        appointment(5, "not a date", AppointmentStatus::Scheduled),
    ];
    let prescriptions = vec![
        prescription(1, "2024-12-31"),
        prescription(2, "2024-05-31"),
        prescription(3, "soon"),
    ];

    let stats = DashboardStats::compute(&appointments, &prescriptions, fixed_now());

    assert_eq!(
        stats,
        DashboardStats {
            total_appointments: 5,
            upcoming_appointments: 1,
            completed_appointments: 1,
            active_prescriptions: 1,
        }
    );
}

#[test]
fn given_more_than_three_items_when_build_then_recent_keeps_first_three_in_order() {
    let appointments = (1..=5)
        .map(|id| appointment(id, "2024-07-01T10:00", AppointmentStatus::Scheduled))
        .collect();
    let prescriptions = vec![prescription(9, "2024-12-31")];

    let dashboard = Dashboard::build(appointments, prescriptions, fixed_now());

    let ids: Vec<i64> = dashboard.recent_appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(dashboard.recent_prescriptions.len(), 1);
    assert_eq!(dashboard.stats.total_appointments, 5);
    assert_eq!(dashboard.stats.upcoming_appointments, 5);
}

#[test]
fn given_no_data_when_build_then_all_zero() {
    let dashboard = Dashboard::build(vec![], vec![], fixed_now());

    assert_eq!(dashboard.stats, DashboardStats::default());
    assert!(dashboard.recent_appointments.is_empty());
}
