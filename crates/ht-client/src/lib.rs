//! ht-client
//!
//! HTTP boundary of the health tracker: the credential transport used by the
//! session layer, plus the appointment and prescription service clients.

pub(crate) mod appointment_service;
pub(crate) mod client;
pub(crate) mod credential_transport;
pub(crate) mod prescription_service;


pub use appointment_service::AppointmentService;
pub use client::{ApiClient, ClientError, ClientResult, FailureKind};
pub use credential_transport::{AuthGrant, CredentialTransport, HttpCredentialTransport};
pub use prescription_service::PrescriptionService;

const AUTH_LOGIN_PATH: &str = "/auth/login";
const AUTH_REGISTER_PATH: &str = "/auth/register";
const APPOINTMENTS_PATH: &str = "/appointments/";
const PRESCRIPTIONS_PATH: &str = "/prescriptions/";
