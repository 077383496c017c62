use crate::{Credentials, NewAppointment, NewPrescription, RegistrationProfile};

use googletest::prelude::*;

fn profile() -> RegistrationProfile {
    RegistrationProfile {
        username: "alice".into(),
        email: "alice@example.com".into(),
        password: "secret".into(),
        first_name: "Alice".into(),
        last_name: "Liddell".into(),
        phone: "555-0100".into(),
    }
}

fn new_prescription(start: &str, end: &str) -> NewPrescription {
    NewPrescription {
        user_id: 1,
        medicine_name: "Ibuprofen".into(),
        dosage: "200mg".into(),
        frequency: "twice daily".into(),
        start_date: start.into(),
        end_date: end.into(),
    }
}

#[test]
fn given_blank_password_when_validate_credentials_then_names_field() {
    let err = Credentials::new("alice", "   ").validate().unwrap_err();

    assert_that!(err.field(), some(eq("password")));
}

#[test]
fn given_credentials_when_debug_then_password_redacted() {
    let rendered = format!("{:?}", Credentials::new("alice", "hunter2"));

    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("alice"));
}

#[test]
fn given_complete_profile_when_validate_then_ok() {
    assert_that!(profile().validate(), ok(anything()));
}

#[test]
fn given_profile_without_phone_when_validate_then_fails_on_phone() {
    let mut incomplete = profile();
    incomplete.phone.clear();

    let err = incomplete.validate().unwrap_err();

    assert_that!(err.field(), some(eq("phone")));
}

#[test]
fn given_profile_when_serialize_then_matches_register_body_shape() {
    let json = serde_json::to_value(profile()).unwrap();

    assert_eq!(json["firstName"], "Alice");
    assert_eq!(json["lastName"], "Liddell");
    assert_eq!(json["password"], "secret");
}

#[test]
fn given_appointment_without_doctor_when_validate_then_fails() {
    let appointment = NewAppointment {
        user_id: 1,
        doctor_name: "".into(),
        appointment_date: "2024-07-01T10:00".into(),
        reason: "Checkup".into(),
    };

    assert_that!(
        appointment.validate().unwrap_err().field(),
        some(eq("doctorName"))
    );
}

#[test]
fn given_end_before_start_when_validate_prescription_then_fails() {
    let err = new_prescription("2024-06-10", "2024-06-01")
        .validate()
        .unwrap_err();

    assert_that!(err.field(), some(eq("endDate")));
}

#[test]
fn given_same_start_and_end_when_validate_prescription_then_ok() {
    assert_that!(
        new_prescription("2024-06-01", "2024-06-01").validate(),
        ok(anything())
    );
}
