use crate::{Decision, Guard, RouteTargets, SessionState};

use log::{debug, warn};

/// Upper bound on redirects followed by one navigation.
pub const MAX_REDIRECTS: usize = 8;

const ROOT_PATH: &str = "/";

pub const REGISTER_PATH: &str = "/register";
pub const APPOINTMENTS_PATH: &str = "/appointments";
pub const PRESCRIPTIONS_PATH: &str = "/prescriptions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget<V> {
    Redirect(String),
    /// Reachable only with an identity
    Protected(V),
    /// Reachable only without an identity
    PublicOnly(V),
    Open(V),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<V> {
    Render { path: String, view: V },
    NotFound { path: String },
    Pending,
    RedirectLimit { path: String },
}

/// Views for the application's fixed route table.
#[derive(Debug, Clone)]
pub struct StandardViews<V> {
    pub login: V,
    pub register: V,
    pub dashboard: V,
    pub appointments: V,
    pub prescriptions: V,
}

/// Exact-match route table with guard evaluation.
///
/// Guards run on every `navigate` call against the snapshot passed in, so a
/// logout is reflected by the very next navigation.
#[derive(Debug, Clone)]
pub struct Router<V> {
    targets: RouteTargets,
    routes: Vec<(String, RouteTarget<V>)>,
}

impl<V: Clone> Router<V> {
    pub fn new(targets: RouteTargets) -> Self {
        Self {
            targets,
            routes: Vec::new(),
        }
    }

    /// `/` sends to the landing page, login/register are public-only, the rest protected.
    pub fn standard(targets: RouteTargets, views: StandardViews<V>) -> Self {
        let login_path = targets.login_path.clone();
        let landing_path = targets.landing_path.clone();

        Self::new(targets)
            .redirect(ROOT_PATH, &landing_path)
            .public_only(&login_path, views.login)
            .public_only(REGISTER_PATH, views.register)
            .protected(&landing_path, views.dashboard)
            .protected(APPOINTMENTS_PATH, views.appointments)
            .protected(PRESCRIPTIONS_PATH, views.prescriptions)
    }

    pub fn targets(&self) -> &RouteTargets {
        &self.targets
    }

    pub fn redirect(self, path: &str, to: &str) -> Self {
        self.route(path, RouteTarget::Redirect(normalize_path(to)))
    }

    pub fn protected(self, path: &str, view: V) -> Self {
        self.route(path, RouteTarget::Protected(view))
    }

    pub fn public_only(self, path: &str, view: V) -> Self {
        self.route(path, RouteTarget::PublicOnly(view))
    }

    pub fn open(self, path: &str, view: V) -> Self {
        self.route(path, RouteTarget::Open(view))
    }

    /// Registers a route; a later registration for the same path wins.
    pub fn route(mut self, path: &str, target: RouteTarget<V>) -> Self {
        let path = normalize_path(path);
        let before = self.routes.len();
        self.routes.retain(|(existing, _)| *existing != path);
        if self.routes.len() != before {
            warn!("Route {path} registered twice; the later target replaces the earlier one");
        }
        self.routes.push((path, target));
        self
    }

    pub fn lookup(&self, path: &str) -> Option<&RouteTarget<V>> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|(existing, _)| *existing == path)
            .map(|(_, target)| target)
    }

    pub fn navigate(&self, path: &str, state: &SessionState) -> Navigation<V> {
        let mut current = normalize_path(path);

        for _ in 0..=MAX_REDIRECTS {
            let Some(target) = self.lookup(&current) else {
                return Navigation::NotFound { path: current };
            };

            let decision = match target {
                RouteTarget::Redirect(to) => Decision::Redirect(to.clone()),
                RouteTarget::Protected(view) => {
                    Guard::RequireAuthenticated.admit(state, &self.targets, || view.clone())
                }
                RouteTarget::PublicOnly(view) => {
                    Guard::RequireUnauthenticated.admit(state, &self.targets, || view.clone())
                }
                RouteTarget::Open(view) => Decision::Render(view.clone()),
            };

            match decision {
                Decision::Render(view) => return Navigation::Render { path: current, view },
                Decision::Pending => return Navigation::Pending,
                Decision::Redirect(to) => {
                    debug!("Redirect {current} -> {to}");
                    current = normalize_path(&to);
                }
            }
        }

        Navigation::RedirectLimit { path: current }
    }
}

/// Canonical form for matching: leading `/`, no query or fragment, no trailing `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
