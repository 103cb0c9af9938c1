use axum::{
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Json},
};
use serde::Serialize;

use crate::GIT_COMMIT_HASH;

#[derive(Serialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
}

// axum handler for health
pub async fn health() -> impl IntoResponse {
    let body = Json(Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let short_hash = GIT_COMMIT_HASH.get(0..7).unwrap_or("");

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!(
        "{}:{}:{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_hash
    )) {
        headers.insert("X-App", value);
    }

    (headers, body)
}
