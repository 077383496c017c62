use crate::{APPOINTMENTS_PATH, ApiClient, ClientResult};

use ht_core::{Appointment, NewAppointment};

use reqwest::Method;

/// Client for the appointments endpoints.
#[derive(Clone)]
pub struct AppointmentService {
    api: ApiClient,
}

impl AppointmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Book an appointment
    pub async fn book(&self, appointment: &NewAppointment) -> ClientResult<Appointment> {
        let req = self
            .api
            .request(Method::POST, APPOINTMENTS_PATH)
            .json(appointment);
        self.api.execute(req).await
    }

    /// List appointments, in server order
    pub async fn list(&self) -> ClientResult<Vec<Appointment>> {
        let req = self.api.request(Method::GET, APPOINTMENTS_PATH);
        self.api.execute(req).await
    }

    /// Cancel an appointment
    pub async fn cancel(&self, appointment_id: i64) -> ClientResult<()> {
        let req = self.api.request(
            Method::DELETE,
            &format!("{APPOINTMENTS_PATH}{appointment_id}"),
        );
        self.api.execute_empty(req).await
    }
}
