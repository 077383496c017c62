use crate::Identity;

use googletest::prelude::*;

fn alice() -> Identity {
    Identity {
        id: 1,
        username: "alice".into(),
        first_name: "Alice".into(),
        last_name: "Liddell".into(),
        email: "alice@example.com".into(),
        phone: Some("555-0100".into()),
    }
}

#[test]
fn given_login_response_without_username_when_deserialize_then_username_empty() {
    let json = r#"{"id":1,"firstName":"Alice","lastName":"Liddell","email":"alice@example.com","phone":"555-0100","createdAt":"2024-01-01"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.id, eq(1));
    assert_that!(identity.username.as_str(), eq(""));
    assert_that!(identity.first_name.as_str(), eq("Alice"));
    assert_that!(identity.phone, some(eq("555-0100")));
}

#[test]
fn given_identity_when_serialize_then_uses_camel_case_fields() {
    let json = serde_json::to_string(&alice()).unwrap();

    assert!(json.contains("\"firstName\":\"Alice\""));
    assert!(json.contains("\"lastName\":\"Liddell\""));
    assert!(!json.contains("first_name"));
}

#[test]
fn given_payload_missing_first_name_when_deserialize_then_fails() {
    let json = r#"{"id":1,"lastName":"Liddell","email":"alice@example.com"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_identity_when_display_name_then_joins_first_and_last() {
    assert_that!(alice().display_name().as_str(), eq("Alice Liddell"));
}

#[test]
fn given_numeric_phone_when_deserialize_then_kept_as_text() {
    let json = r#"{"id":1,"firstName":"Alice","lastName":"Liddell","email":"alice@example.com","phone":5550100}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.phone, some(eq("5550100")));
}

#[test]
fn given_null_phone_when_deserialize_then_none() {
    let json = r#"{"id":1,"firstName":"Alice","lastName":"Liddell","email":"alice@example.com","phone":null}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.phone, none());
}

#[test]
fn given_boolean_phone_when_deserialize_then_fails() {
    let json = r#"{"id":1,"firstName":"Alice","lastName":"Liddell","email":"alice@example.com","phone":true}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}
