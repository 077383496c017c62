use crate::SessionState;

/// Navigation targets the guards redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTargets {
    pub login_path: String,
    pub landing_path: String,
}

impl RouteTargets {
    pub fn new(login_path: impl Into<String>, landing_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            landing_path: landing_path.into(),
        }
    }
}

impl Default for RouteTargets {
    fn default() -> Self {
        Self::new("/login", "/dashboard")
    }
}

/// Outcome of a guard: what the navigation layer should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<V> {
    Render(V),
    Redirect(String),
    /// The session has not been read yet
    Pending,
}

impl<V> Decision<V> {
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Decision<U> {
        match self {
            Self::Render(view) => Decision::Render(f(view)),
            Self::Redirect(path) => Decision::Redirect(path),
            Self::Pending => Decision::Pending,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::Render(_) | Self::Pending => None,
        }
    }
}

/// View wrappers gating on whether an identity exists.
///
/// Guards only read the state snapshot they are given; they never log in or
/// out themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    RequireAuthenticated,
    RequireUnauthenticated,
}

impl Guard {
    pub fn evaluate(self, state: &SessionState, targets: &RouteTargets) -> Decision<()> {
        match (self, state) {
            (_, SessionState::Unknown) => Decision::Pending,
            (Self::RequireAuthenticated, SessionState::Authenticated(_))
            | (Self::RequireUnauthenticated, SessionState::Unauthenticated) => Decision::Render(()),
            (Self::RequireAuthenticated, SessionState::Unauthenticated) => {
                Decision::Redirect(targets.login_path.clone())
            }
            (Self::RequireUnauthenticated, SessionState::Authenticated(_)) => {
                Decision::Redirect(targets.landing_path.clone())
            }
        }
    }

    /// Builds the view only when the guard admits it.
    pub fn admit<V>(
        self,
        state: &SessionState,
        targets: &RouteTargets,
        make_view: impl FnOnce() -> V,
    ) -> Decision<V> {
        self.evaluate(state, targets).map(|()| make_view())
    }
}
