//! Route table of the equipment console.
//!
//! `/login` is the only public route. Every functional page lives under the
//! root layout at `/` and carries its own `requiresAuth` flag (left at the
//! default `true`); nothing is inherited from the layout.

use super::{RouteDefinition, RouteMeta};

pub const DEFAULT_LAYOUT: &str = "DefaultLayout";

#[must_use]
pub fn app_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::new("/login", "LoginView")
            .named("login")
            .with_meta(RouteMeta::public().with_title("登录")),
        RouteDefinition::new("/", DEFAULT_LAYOUT)
            .with_meta(RouteMeta::default())
            .with_children(vec![
                page("", "home", "HomeView", "首页"),
                page("users", "users", "UserManageView", "用户管理"),
                page("equipment", "equipment", "EquipmentManageView", "设备管理"),
                page("maintenance", "maintenance", "MaintenanceManageView", "维修管理"),
                page("rental", "rental", "RentalManageView", "租赁管理"),
                page("inspection", "inspection", "InspectionManageView", "巡检管理"),
            ]),
    ]
}

fn page(path: &str, name: &str, view: &str, title: &str) -> RouteDefinition {
    RouteDefinition::new(path, view)
        .named(name)
        .with_meta(RouteMeta::default().with_title(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_wraps_every_page() {
        let routes = app_routes();
        let layout = routes
            .iter()
            .find(|route| route.component.as_str() == DEFAULT_LAYOUT)
            .unwrap();

        assert_eq!(layout.path, "/");
        assert_eq!(layout.name, None);
        assert!(layout.meta.requires_auth);
        assert_eq!(layout.children.len(), 6);
        assert!(layout
            .children
            .iter()
            .all(|child| child.meta.requires_auth && child.meta.title.is_some()));
    }

    #[test]
    fn declarations_round_trip_through_json() {
        let json = serde_json::to_string(&app_routes()).unwrap();
        let parsed: Vec<RouteDefinition> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, app_routes());
    }
}
