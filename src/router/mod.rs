//! Route table, login guard and the navigation engine that ties them together.

mod error;
mod guard;
mod navigator;
mod route;
pub mod routes;
mod table;

pub use self::error::Error;
pub use self::guard::{guard, Decision, Outcome, HOME_PATH, LOGIN_ROUTE};
pub use self::navigator::{Navigation, NavigationAttempt, Navigator, MAX_REDIRECT_DEPTH};
pub use self::route::{RouteDefinition, RouteMeta, ViewId};
pub use self::table::{RouteMatch, RouteRecord, RouteTable};
