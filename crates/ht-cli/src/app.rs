use crate::{CliError, CliResult, Page};

use ht_client::{
    ApiClient, AppointmentService, CredentialTransport, HttpCredentialTransport,
    PrescriptionService,
};
use ht_config::Config;
use ht_core::{
    Credentials, Dashboard, Identity, NewAppointment, NewPrescription, RegistrationProfile,
};
use ht_session::{
    FileSessionStore, Navigation, RouteTargets, Router, Session, SessionStore, normalize_path,
};

use std::sync::Arc;

use chrono::Local;
use log::{debug, info};
use serde_json::{Value, json};

/// Where a navigation landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The requested page is admitted; `identity` is the snapshot it was admitted under.
    Page {
        page: Page,
        identity: Option<Identity>,
    },
    /// The guards sent the user elsewhere.
    Redirect(String),
}

/// The production wiring: HTTP transport, session file on disk.
pub type HttpApp = App<HttpCredentialTransport, FileSessionStore>;

/// Pages plus the collaborators they need.
///
/// Every page goes through the router first. A page the guards redirect away
/// from never builds a service client, so a logged-out user causes no data
/// requests.
pub struct App<T, S> {
    session: Arc<Session<T, S>>,
    router: Router<Page>,
    api: ApiClient,
}

impl HttpApp {
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let api = ApiClient::new(&config.api.base_url, config.api.timeout())?;
        let transport = HttpCredentialTransport::new(api.clone());
        let store = FileSessionStore::new(config.session_path());
        let session = Session::restore(transport, store);
        let targets = RouteTargets::new(&config.routes.login_path, &config.routes.landing_path);

        Ok(Self::new(Arc::new(session), targets, api))
    }
}

impl<T, S> App<T, S>
where
    T: CredentialTransport,
    S: SessionStore,
{
    pub fn new(session: Arc<Session<T, S>>, targets: RouteTargets, api: ApiClient) -> Self {
        Self {
            session,
            router: Router::standard(targets, Page::standard_views()),
            api,
        }
    }

    pub fn session(&self) -> &Session<T, S> {
        &self.session
    }

    pub fn router(&self) -> &Router<Page> {
        &self.router
    }

    /// Resolve `path` against the current session state.
    pub fn enter(&self, path: &str) -> CliResult<Entry> {
        let requested = normalize_path(path);
        let state = self.session.state();

        match self.router.navigate(&requested, &state) {
            Navigation::Render { path, view } if path == requested => Ok(Entry::Page {
                page: view,
                identity: state.identity().cloned(),
            }),
            Navigation::Render { path, .. } => {
                debug!("{requested} redirected to {path}");
                Ok(Entry::Redirect(path))
            }
            Navigation::NotFound { path } => Err(CliError::not_found(path)),
            Navigation::Pending => Err(CliError::navigation("session not initialized")),
            Navigation::RedirectLimit { path } => Err(CliError::navigation(format!(
                "too many redirects, stopped at {path}"
            ))),
        }
    }

    /// Navigate and render the page's default view.
    pub async fn open(&self, path: &str) -> CliResult<Value> {
        match self.enter(path)? {
            Entry::Redirect(to) => Ok(redirect(&to)),
            Entry::Page { page, identity } => self.render(page, identity).await,
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> CliResult<Value> {
        match self.enter_page(Page::Login)? {
            Entry::Redirect(to) => Ok(redirect(&to)),
            Entry::Page { .. } => {
                let identity = self.session.login(credentials).await?;
                Ok(self.signed_in(identity))
            }
        }
    }

    pub async fn register(&self, profile: &RegistrationProfile) -> CliResult<Value> {
        match self.enter_page(Page::Register)? {
            Entry::Redirect(to) => Ok(redirect(&to)),
            Entry::Page { .. } => {
                let identity = self.session.register(profile).await?;
                Ok(self.signed_in(identity))
            }
        }
    }

    pub fn logout(&self) -> Value {
        json!({ "logout": self.session.logout() })
    }

    pub fn whoami(&self) -> Value {
        json!({ "user": self.session.current_identity() })
    }

    pub async fn dashboard(&self) -> CliResult<Value> {
        self.open_page(Page::Dashboard).await
    }

    pub async fn list_appointments(&self) -> CliResult<Value> {
        self.open_page(Page::Appointments).await
    }

    pub async fn list_prescriptions(&self) -> CliResult<Value> {
        self.open_page(Page::Prescriptions).await
    }

    pub async fn book_appointment(
        &self,
        doctor_name: &str,
        appointment_date: &str,
        reason: &str,
    ) -> CliResult<Value> {
        let identity = match self.enter_page(Page::Appointments)? {
            Entry::Redirect(to) => return Ok(redirect(&to)),
            Entry::Page { identity, .. } => require_identity(identity)?,
        };

        let request = NewAppointment {
            user_id: identity.id,
            doctor_name: doctor_name.to_string(),
            appointment_date: appointment_date.to_string(),
            reason: reason.to_string(),
        };
        request.validate()?;

        let appointment = AppointmentService::new(self.api()).book(&request).await?;
        info!("Booked appointment {} for user {}", appointment.id, identity.id);

        Ok(json!({ "appointment": appointment }))
    }

    pub async fn cancel_appointment(&self, appointment_id: i64) -> CliResult<Value> {
        let identity = match self.enter_page(Page::Appointments)? {
            Entry::Redirect(to) => return Ok(redirect(&to)),
            Entry::Page { identity, .. } => require_identity(identity)?,
        };

        AppointmentService::new(self.api())
            .cancel(appointment_id)
            .await?;
        info!(
            "Cancelled appointment {appointment_id} for user {}",
            identity.id
        );

        Ok(json!({ "cancelled": appointment_id }))
    }

    pub async fn add_prescription(
        &self,
        medicine_name: &str,
        dosage: &str,
        frequency: &str,
        start_date: &str,
        end_date: &str,
    ) -> CliResult<Value> {
        let identity = match self.enter_page(Page::Prescriptions)? {
            Entry::Redirect(to) => return Ok(redirect(&to)),
            Entry::Page { identity, .. } => require_identity(identity)?,
        };

        let request = NewPrescription {
            user_id: identity.id,
            medicine_name: medicine_name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        };
        request.validate()?;

        let prescription = PrescriptionService::new(self.api()).add(&request).await?;
        info!(
            "Recorded prescription {} for user {}",
            prescription.id, identity.id
        );

        Ok(json!({ "prescription": prescription }))
    }

    async fn open_page(&self, page: Page) -> CliResult<Value> {
        let path = page.path(self.router.targets()).to_string();
        self.open(&path).await
    }

    fn enter_page(&self, page: Page) -> CliResult<Entry> {
        self.enter(page.path(self.router.targets()))
    }

    async fn render(&self, page: Page, identity: Option<Identity>) -> CliResult<Value> {
        match page {
            Page::Login | Page::Register => Ok(json!({ "page": page })),
            Page::Dashboard => {
                let identity = require_identity(identity)?;
                let api = self.api();
                let appointments = AppointmentService::new(api.clone());
                let prescriptions = PrescriptionService::new(api);

                let (appointments, prescriptions) = tokio::try_join!(
                    appointments.list(),
                    prescriptions.list_for_user(identity.id)
                )?;
                let dashboard =
                    Dashboard::build(appointments, prescriptions, Local::now().naive_local());

                Ok(json!({
                    "page": page,
                    "user": identity.display_name(),
                    "dashboard": dashboard,
                }))
            }
            Page::Appointments => {
                require_identity(identity)?;
                let appointments = AppointmentService::new(self.api()).list().await?;
                Ok(json!({ "page": page, "appointments": appointments }))
            }
            Page::Prescriptions => {
                let identity = require_identity(identity)?;
                let prescriptions = PrescriptionService::new(self.api())
                    .list_for_user(identity.id)
                    .await?;
                Ok(json!({ "page": page, "prescriptions": prescriptions }))
            }
        }
    }

    fn signed_in(&self, identity: Identity) -> Value {
        json!({
            "user": identity,
            "next": self.router.targets().landing_path,
        })
    }

    /// Service client carrying the session's bearer token, if the server issued one.
    fn api(&self) -> ApiClient {
        self.api.with_bearer_token(self.session.token())
    }
}

fn redirect(to: &str) -> Value {
    json!({ "redirect": to })
}

fn require_identity(identity: Option<Identity>) -> CliResult<Identity> {
    identity.ok_or_else(|| CliError::navigation("protected page admitted without an identity"))
}
