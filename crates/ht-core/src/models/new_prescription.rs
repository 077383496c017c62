use crate::models::require_present;
use crate::{CoreError, CoreResult, parse_client_datetime};

use serde::Serialize;

/// Request body for `POST /prescriptions/`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    pub user_id: i64,
    pub medicine_name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
}

impl NewPrescription {
    pub fn validate(&self) -> CoreResult<()> {
        require_present("medicineName", &self.medicine_name)?;
        require_present("dosage", &self.dosage)?;
        require_present("frequency", &self.frequency)?;
        require_present("startDate", &self.start_date)?;
        require_present("endDate", &self.end_date)?;

        if let (Some(start), Some(end)) = (
            parse_client_datetime(&self.start_date),
            parse_client_datetime(&self.end_date),
        ) && end < start
        {
            return Err(CoreError::validation(
                "endDate",
                "must not be before startDate",
            ));
        }

        Ok(())
    }
}
