use ht_session::{
    APPOINTMENTS_PATH, PRESCRIPTIONS_PATH, REGISTER_PATH, RouteTargets, StandardViews,
};

use serde::Serialize;

/// The views behind the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Appointments,
    Prescriptions,
}

impl Page {
    pub fn standard_views() -> StandardViews<Page> {
        StandardViews {
            login: Page::Login,
            register: Page::Register,
            dashboard: Page::Dashboard,
            appointments: Page::Appointments,
            prescriptions: Page::Prescriptions,
        }
    }

    /// Where this page is mounted for the given targets.
    pub fn path(self, targets: &RouteTargets) -> &str {
        match self {
            Page::Login => &targets.login_path,
            Page::Register => REGISTER_PATH,
            Page::Dashboard => &targets.landing_path,
            Page::Appointments => APPOINTMENTS_PATH,
            Page::Prescriptions => PRESCRIPTIONS_PATH,
        }
    }
}
