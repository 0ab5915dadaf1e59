//! Decides what a screen should do given the session state

use lexi_shared::const_config::routes::{ROUTE_DASHBOARD, ROUTE_LOGIN};

use crate::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Only for logged in users
    Protected,
    /// Only for anonymous users (login, registration, password reset)
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session is still being resolved
    Spinner,
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

impl RouteAccess {
    pub fn evaluate(self, session_state: &SessionState) -> GuardOutcome {
        match (self, session_state) {
            (_, SessionState::Loading) => GuardOutcome::Spinner,
            (RouteAccess::Protected, SessionState::Anonymous) => GuardOutcome::RedirectToLogin,
            (RouteAccess::Public, SessionState::Authenticated(_)) => {
                GuardOutcome::RedirectToDashboard
            }
            (RouteAccess::Protected, SessionState::Authenticated(_))
            | (RouteAccess::Public, SessionState::Anonymous) => GuardOutcome::Render,
        }
    }
}

impl GuardOutcome {
    /// Where to go instead of rendering, if anywhere
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::RedirectToLogin => Some(ROUTE_LOGIN),
            GuardOutcome::RedirectToDashboard => Some(ROUTE_DASHBOARD),
            GuardOutcome::Spinner | GuardOutcome::Render => None,
        }
    }
}
