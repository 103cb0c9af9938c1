//! Navigation engine around the guard.
//!
//! Every attempt resolves the target, reads the token, asks the guard and, on a
//! redirect, substitutes the new target and starts over. Redirect chains are
//! bounded so a misconfigured table surfaces as an error instead of spinning.

use super::{guard, Decision, Error, RouteMatch, RouteRecord, RouteTable};
use crate::{
    session::{read_token, TokenStore},
    APP_TITLE,
};
use tracing::{info, warn};

/// Maximum redirect depth to prevent infinite redirect loops.
pub const MAX_REDIRECT_DEPTH: usize = 5;

/// Inputs of a single guard evaluation.
#[derive(Clone, Debug)]
pub struct NavigationAttempt<'a> {
    pub to: RouteMatch<'a>,
    pub from: Option<&'a RouteRecord>,
}

/// A completed navigation.
#[derive(Clone, Debug)]
pub struct Navigation<'a> {
    pub route: RouteMatch<'a>,
    /// Redirect decisions applied before the final route, in order.
    pub redirects: Vec<Decision>,
}

impl Navigation<'_> {
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    /// Document title for the final route.
    #[must_use]
    pub fn title(&self) -> String {
        self.route.route.title().map_or_else(
            || APP_TITLE.to_string(),
            |title| format!("{title} - {APP_TITLE}"),
        )
    }
}

#[derive(Clone, Debug)]
pub struct Navigator {
    table: RouteTable,
}

impl Navigator {
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Navigates to `path`, following guard redirects.
    ///
    /// # Errors
    /// `RouteNotFound` if the path or a redirect target does not resolve,
    /// `RedirectLoop` if more than [`MAX_REDIRECT_DEPTH`] redirects are needed.
    pub fn navigate<'a, S>(
        &'a self,
        path: &str,
        from: Option<&'a RouteRecord>,
        store: &S,
    ) -> Result<Navigation<'a>, Error>
    where
        S: TokenStore + ?Sized,
    {
        let mut attempt = NavigationAttempt {
            to: self.table.resolve(path)?,
            from,
        };
        let mut redirects = Vec::new();

        loop {
            let token = read_token(store);
            let decision = guard(attempt.to.route, attempt.from, token.as_ref());

            let next = match &decision {
                Decision::Proceed => {
                    info!(
                        path = %attempt.to.path,
                        route = attempt.to.route.name(),
                        redirects = redirects.len(),
                        "navigation complete"
                    );
                    return Ok(Navigation {
                        route: attempt.to,
                        redirects,
                    });
                }
                Decision::RedirectNamed(name) => self.table.match_name(name)?,
                Decision::RedirectPath(target) => self.table.resolve(target)?,
            };

            info!(from = %attempt.to.path, to = %next.path, "{decision}");
            redirects.push(decision);

            if redirects.len() > MAX_REDIRECT_DEPTH {
                warn!(path, depth = redirects.len(), "redirect loop detected");
                return Err(Error::RedirectLoop {
                    path: path.to_string(),
                    depth: redirects.len(),
                });
            }

            attempt = NavigationAttempt {
                to: next,
                from: attempt.from,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{routes::app_routes, RouteDefinition, HOME_PATH, LOGIN_ROUTE};
    use crate::session::{MemoryTokenStore, TOKEN_KEY};

    fn navigator() -> Navigator {
        Navigator::new(RouteTable::new(app_routes()).unwrap())
    }

    fn signed_in() -> MemoryTokenStore {
        let mut store = MemoryTokenStore::default();
        store.insert(TOKEN_KEY, "abc123");
        store
    }

    #[test]
    fn unauthenticated_user_lands_on_login() {
        let navigator = navigator();
        let store = MemoryTokenStore::default();

        let navigation = navigator.navigate("/equipment", None, &store).unwrap();

        assert_eq!(navigation.route.route.name(), Some("login"));
        assert_eq!(navigation.route.path, "/login");
        assert_eq!(
            navigation.redirects,
            vec![Decision::RedirectNamed(LOGIN_ROUTE.to_string())]
        );
        assert!(navigation.was_redirected());
    }

    #[test]
    fn authenticated_user_opening_login_lands_on_home() {
        let navigator = navigator();
        let store = signed_in();

        let navigation = navigator.navigate("/login", None, &store).unwrap();

        assert_eq!(navigation.route.route.name(), Some("home"));
        assert_eq!(
            navigation.redirects,
            vec![Decision::RedirectPath(HOME_PATH.to_string())]
        );
    }

    #[test]
    fn authenticated_user_proceeds_without_redirect() {
        let navigator = navigator();
        let store = signed_in();
        let from = navigator.table().by_name("home").unwrap();

        let navigation = navigator
            .navigate("/maintenance?status=open", Some(from), &store)
            .unwrap();

        assert_eq!(navigation.route.route.name(), Some("maintenance"));
        assert!(!navigation.was_redirected());
        assert_eq!(navigation.title(), format!("维修管理 - {APP_TITLE}"));
    }

    #[test]
    fn redirect_targets_are_stable() {
        let navigator = navigator();

        // Re-evaluating the computed target must proceed immediately.
        let anonymous = MemoryTokenStore::default();
        let first = navigator.navigate("/users", None, &anonymous).unwrap();
        let again = navigator
            .navigate(&first.route.path, None, &anonymous)
            .unwrap();
        assert!(!again.was_redirected());

        let store = signed_in();
        let first = navigator.navigate("/login", None, &store).unwrap();
        let again = navigator.navigate(&first.route.path, None, &store).unwrap();
        assert!(!again.was_redirected());
        assert_eq!(again.route.route.name(), Some("home"));
    }

    #[test]
    fn no_route_needs_more_than_one_redirect() {
        let navigator = navigator();
        let anonymous = MemoryTokenStore::default();
        let store = signed_in();

        for record in navigator.table().records() {
            for tokens in [&anonymous, &store] {
                let navigation = navigator.navigate(&record.path, None, tokens).unwrap();
                assert!(navigation.redirects.len() <= 1, "path: {}", record.path);
            }
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        let navigator = navigator();
        let store = signed_in();

        assert!(matches!(
            navigator.navigate("/reports", None, &store),
            Err(Error::RouteNotFound(_))
        ));
    }

    #[test]
    fn missing_login_route_surfaces_not_found() {
        let table = RouteTable::new(vec![RouteDefinition::new("/", "HomeView").named("home")])
            .unwrap();
        let navigator = Navigator::new(table);

        assert!(matches!(
            navigator.navigate("/", None, &MemoryTokenStore::default()),
            Err(Error::RouteNotFound(_))
        ));
    }

    #[test]
    fn protected_login_route_is_a_redirect_loop() {
        let table = RouteTable::new(vec![
            RouteDefinition::new("/login", "LoginView").named("login"),
            RouteDefinition::new("/", "HomeView").named("home"),
        ])
        .unwrap();
        let navigator = Navigator::new(table);

        assert!(matches!(
            navigator.navigate("/", None, &MemoryTokenStore::default()),
            Err(Error::RedirectLoop { depth, .. }) if depth == MAX_REDIRECT_DEPTH + 1
        ));
    }

    #[test]
    fn login_redirect_follows_the_name_not_the_path() {
        let table = RouteTable::new(vec![
            RouteDefinition::new("/auth/login", "LoginView")
                .named("login")
                .with_meta(crate::router::RouteMeta::public()),
            RouteDefinition::new("/", "DefaultLayout").with_children(vec![
                RouteDefinition::new("", "HomeView").named("home"),
                RouteDefinition::new("users", "UserManageView").named("users"),
            ]),
        ])
        .unwrap();
        let navigator = Navigator::new(table);

        let navigation = navigator
            .navigate("/users", None, &MemoryTokenStore::default())
            .unwrap();

        assert_eq!(
            navigation.redirects,
            vec![Decision::RedirectNamed(LOGIN_ROUTE.to_string())]
        );
        assert_eq!(navigation.route.path, "/auth/login");
        assert_eq!(navigation.route.route.name(), Some("login"));
        assert!(matches!(
            navigator.navigate("/login", None, &MemoryTokenStore::default()),
            Err(Error::RouteNotFound(_))
        ));
    }

    #[test]
    fn title_falls_back_to_app_title() {
        let navigator = navigator();
        let navigation = navigator
            .navigate("/login", None, &MemoryTokenStore::default())
            .unwrap();

        assert_eq!(navigation.title(), format!("登录 - {APP_TITLE}"));

        let table = RouteTable::new(vec![RouteDefinition::new("/login", "LoginView")
            .named("login")
            .with_meta(crate::router::RouteMeta::public())])
        .unwrap();
        let navigator = Navigator::new(table);
        let navigation = navigator
            .navigate("/login", None, &MemoryTokenStore::default())
            .unwrap();

        assert_eq!(navigation.title(), APP_TITLE);
    }
}
