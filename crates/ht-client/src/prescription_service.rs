use crate::{ApiClient, ClientResult, PRESCRIPTIONS_PATH};

use ht_core::{NewPrescription, Prescription};

use reqwest::Method;

/// Client for the prescriptions endpoints.
#[derive(Clone)]
pub struct PrescriptionService {
    api: ApiClient,
}

impl PrescriptionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Record a prescription
    pub async fn add(&self, prescription: &NewPrescription) -> ClientResult<Prescription> {
        let req = self
            .api
            .request(Method::POST, PRESCRIPTIONS_PATH)
            .json(prescription);
        self.api.execute(req).await
    }

    /// Prescriptions belonging to one user
    pub async fn list_for_user(&self, user_id: i64) -> ClientResult<Vec<Prescription>> {
        let req = self
            .api
            .request(Method::GET, &format!("{PRESCRIPTIONS_PATH}{user_id}"));
        self.api.execute(req).await
    }
}
