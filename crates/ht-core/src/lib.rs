pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::appointment::Appointment;
pub use models::appointment_status::AppointmentStatus;
pub use models::client_date::parse_client_datetime;
pub use models::credentials::Credentials;
pub use models::dashboard::{Dashboard, DashboardStats, RECENT_ITEM_COUNT};
pub use models::identity::Identity;
pub use models::new_appointment::NewAppointment;
pub use models::new_prescription::NewPrescription;
pub use models::prescription::Prescription;
pub use models::registration_profile::RegistrationProfile;
