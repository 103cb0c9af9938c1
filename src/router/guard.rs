//! Login guard run before every navigation.
//!
//! The guard is a pure function of the target's `requiresAuth` flag, the
//! target's name and whether a token is present. The token is handed in by the
//! caller; the guard never reads or writes the token store.

use super::RouteRecord;
use crate::session::AuthToken;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Name of the login route, target of the unauthenticated redirect.
pub const LOGIN_ROUTE: &str = "login";

/// Path an authenticated user is sent to when opening the login page.
pub const HOME_PATH: &str = "/";

/// What the navigation engine must do with the attempted transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum Decision {
    Proceed,
    /// Redirect to the route with this name; survives path changes.
    RedirectNamed(String),
    /// Redirect to this literal path.
    RedirectPath(String),
}

/// Terminal state reached by one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Proceeding,
    RedirectingToLogin,
    RedirectingToHome,
}

impl Decision {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self {
            Decision::Proceed => Outcome::Proceeding,
            Decision::RedirectNamed(_) => Outcome::RedirectingToLogin,
            Decision::RedirectPath(_) => Outcome::RedirectingToHome,
        }
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        !matches!(self, Decision::Proceed)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Proceed => write!(f, "proceed"),
            Decision::RedirectNamed(name) => write!(f, "redirect to route {name:?}"),
            Decision::RedirectPath(path) => write!(f, "redirect to {path}"),
        }
    }
}

/// Decides whether the navigation from `from` to `to` may proceed.
///
/// Order matters and mirrors the deployed behavior: the missing-token check
/// runs before the login-page check.
#[must_use]
pub fn guard(to: &RouteRecord, from: Option<&RouteRecord>, token: Option<&AuthToken>) -> Decision {
    let has_token = token.is_some();

    let decision = if to.requires_auth() && !has_token {
        Decision::RedirectNamed(LOGIN_ROUTE.to_string())
    } else if to.name() == Some(LOGIN_ROUTE) && has_token {
        Decision::RedirectPath(HOME_PATH.to_string())
    } else {
        Decision::Proceed
    };

    debug!(
        to = %to.path,
        from = from.map(|route| route.path.as_str()),
        requires_auth = to.requires_auth(),
        has_token,
        outcome = ?decision.outcome(),
        "navigation guard"
    );

    decision
}
