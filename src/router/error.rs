use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no route matches: {0}")]
    RouteNotFound(String),
    #[error("route name declared more than once: {0}")]
    AmbiguousRouteName(String),
    #[error("route path declared more than once under {parent}: {path}")]
    DuplicatePath { parent: String, path: String },
    #[error("invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("redirect loop detected after {depth} redirects while navigating to {path}")]
    RedirectLoop { path: String, depth: usize },
    #[error("invalid route declarations")]
    Declaration(#[from] serde_json::Error),
    #[error("could not read route declarations from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
