use super::TokenStore;
use serde_json::{Map, Value};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{trace, warn};

/// Persisted store backed by a JSON object file, e.g. `{"token": "..."}`.
///
/// The file is read on every lookup because login and logout write it from
/// outside this process. A missing file is an empty store and an unreadable or
/// malformed one is logged and treated as empty. String values are returned
/// exactly as stored; any other JSON value reads as absent.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<Map<String, Value>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "token store file not found");
                return None;
            }
            Err(err) => {
                warn!(path = %self.path.display(), "failed to read token store: {err}");
                return None;
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(map) => Some(map),
            Err(err) => {
                warn!(path = %self.path.display(), "malformed token store: {err}");
                None
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{read_token, MemoryTokenStore, TOKEN_KEY};
    use std::fs;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("storage.json"));

        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn reads_token_and_follows_external_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileTokenStore::new(&path);

        fs::write(&path, r#"{"token": "abc123", "theme": "dark"}"#).unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert!(read_token(&store).is_some());

        // logout clears the key from outside the process
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();
        assert!(read_token(&store).is_none());
    }

    #[test]
    fn string_values_are_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileTokenStore::new(&path);

        fs::write(&path, r#"{"token": " abc "}"#).unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(" abc "));

        // present but empty is still a token, same as the in-memory store
        fs::write(&path, r#"{"token": ""}"#).unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(""));
        assert!(read_token(&store).is_some());

        let mut memory = MemoryTokenStore::default();
        memory.insert(TOKEN_KEY, "");
        assert_eq!(memory.get(TOKEN_KEY), store.get(TOKEN_KEY));
    }

    #[test]
    fn non_string_values_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileTokenStore::new(&path);

        fs::write(&path, r#"{"token": null}"#).unwrap();
        assert_eq!(store.get(TOKEN_KEY), None);

        fs::write(&path, r#"{"token": 42}"#).unwrap();
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "token=abc123").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.path(), path.as_path());
    }
}
