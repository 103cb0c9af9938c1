//! # Equipment Console (SPA shell)
//!
//! `equipment-console` is the client shell of the equipment-management web
//! application. It owns the route table, the login guard that runs before every
//! navigation, and a small host process that serves the built single-page app.
//!
//! ## Route table
//!
//! Routes are declared as a tree: `/login` sits at the top level and is the only
//! route reachable without a token; every functional page (home, users,
//! equipment, maintenance, rental, inspection) is nested under the root layout
//! at `/`. Names are unique across the whole tree and the table refuses to build
//! otherwise, because redirects are resolved by name.
//!
//! ## Navigation guard
//!
//! The guard is a pure function of the target route's `requiresAuth` flag and
//! whether a token is present. It never touches the token store itself; the
//! caller reads the token and passes it in. `requiresAuth` is a flat per-route
//! flag that defaults to `true`; children do not inherit from their layout.
//!
//! ## Token
//!
//! The token is opaque. Only its presence matters here, and it is held in a
//! `SecretString` so it never ends up in logs.

pub mod cli;
pub mod router;
pub mod session;
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

/// Display title appended to every page title.
pub const APP_TITLE: &str = "设备管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
