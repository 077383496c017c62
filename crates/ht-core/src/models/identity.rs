use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated principal as returned by the auth service.
///
/// The login response does not echo the username, so it defaults to empty
/// on decode and is filled in by the session from the submitted credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "phone_text"
    )]
    pub phone: Option<String>,
}

/// Phone numbers arrive as text or as bare JSON numbers; both are kept as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

fn phone_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let phone = Option::<PhoneValue>::deserialize(deserializer)?;

    Ok(phone.map(|value| match value {
        PhoneValue::Text(text) => text,
        PhoneValue::Integer(number) => number.to_string(),
        PhoneValue::Decimal(number) => number.to_string(),
    }))
}

impl Identity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
