use crate::AppointmentStatus;

use std::str::FromStr;

#[test]
fn test_appointment_status_as_str() {
    assert_eq!(AppointmentStatus::Scheduled.as_str(), "SCHEDULED");
    assert_eq!(AppointmentStatus::Completed.as_str(), "COMPLETED");
    assert_eq!(AppointmentStatus::Cancelled.as_str(), "CANCELLED");
}

#[test]
fn test_appointment_status_from_str() {
    assert_eq!(
        AppointmentStatus::from_str("SCHEDULED").unwrap(),
        AppointmentStatus::Scheduled
    );
    assert_eq!(
        AppointmentStatus::from_str("completed").unwrap(),
        AppointmentStatus::Completed
    );
    assert!(AppointmentStatus::from_str("RESCHEDULED").is_err());
}

#[test]
fn given_unknown_wire_status_when_deserialize_then_kept_as_other() {
    let status: AppointmentStatus = serde_json::from_str(r#""NO_SHOW""#).unwrap();

    assert_eq!(status, AppointmentStatus::Other("NO_SHOW".into()));
    assert_eq!(serde_json::to_string(&status).unwrap(), r#""NO_SHOW""#);
}
