use crate::parse_client_datetime;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub medicine_name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
}

impl Prescription {
    /// End date strictly after `now`. Unparseable dates are never active.
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        parse_client_datetime(&self.end_date).is_some_and(|end| end > now)
    }
}
