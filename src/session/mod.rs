//! Token storage as seen by the navigation layer.
//!
//! The store is an opaque key/value contract. This crate only ever reads the
//! `token` key; writing and clearing it belongs to the login and logout flows.
//! Token values are wrapped in [`SecretString`] so they stay out of logs.

mod file;

pub use self::file::FileTokenStore;

use secrecy::SecretString;
use std::collections::HashMap;

/// Key the session token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Read side of a persisted key/value store.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Opaque session credential. Only its presence is meaningful here.
#[derive(Clone, Debug)]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.0
    }
}

/// Reads the session token from `store`.
pub fn read_token<S>(store: &S) -> Option<AuthToken>
where
    S: TokenStore + ?Sized,
{
    store.get(TOKEN_KEY).map(AuthToken::new)
}

/// In-process store, used by tests and by tokens passed on the command line.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
