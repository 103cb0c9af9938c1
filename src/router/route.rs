//! Route declarations as written by the application (or loaded from JSON).
//!
//! Metadata is a closed structure: `requiresAuth` and `title` are the only keys
//! accepted, and unknown keys are rejected when deserializing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to the view rendered for a route.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const fn default_requires_auth() -> bool {
    true
}

/// Per-route metadata. `requires_auth` defaults to `true` when omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteMeta {
    #[serde(default = "default_requires_auth")]
    pub requires_auth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for RouteMeta {
    fn default() -> Self {
        Self {
            requires_auth: default_requires_auth(),
            title: None,
        }
    }
}

impl RouteMeta {
    /// Metadata for a route reachable without a token.
    #[must_use]
    pub fn public() -> Self {
        Self {
            requires_auth: false,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A declared route: path relative to its parent, optional unique name, the
/// view it renders, metadata and nested children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDefinition {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub component: ViewId,
    #[serde(default)]
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    pub fn new(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: ViewId::new(component),
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteDefinition>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_meta_requires_auth() {
        let route: RouteDefinition = serde_json::from_value(json!({
            "path": "users",
            "name": "users",
            "component": "UserManageView"
        }))
        .unwrap();

        assert!(route.meta.requires_auth);
        assert_eq!(route.meta.title, None);
        assert!(route.children.is_empty());
    }

    #[test]
    fn meta_without_requires_auth_defaults_to_true() {
        let route: RouteDefinition = serde_json::from_value(json!({
            "path": "rental",
            "component": "RentalManageView",
            "meta": { "title": "租赁管理" }
        }))
        .unwrap();

        assert!(route.meta.requires_auth);
        assert_eq!(route.meta.title.as_deref(), Some("租赁管理"));
    }

    #[test]
    fn explicit_public_route() {
        let route: RouteDefinition = serde_json::from_value(json!({
            "path": "/login",
            "name": "login",
            "component": "LoginView",
            "meta": { "requiresAuth": false }
        }))
        .unwrap();

        assert!(!route.meta.requires_auth);
        assert_eq!(route.component.as_str(), "LoginView");
    }

    #[test]
    fn unknown_meta_keys_are_rejected() {
        let result: Result<RouteDefinition, _> = serde_json::from_value(json!({
            "path": "users",
            "component": "UserManageView",
            "meta": { "roles": ["admin"] }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_camel_case_meta() {
        let route = RouteDefinition::new("/login", "LoginView")
            .named("login")
            .with_meta(RouteMeta::public().with_title("登录"));

        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(
            value,
            json!({
                "path": "/login",
                "name": "login",
                "component": "LoginView",
                "meta": { "requiresAuth": false, "title": "登录" }
            })
        );
    }
}
