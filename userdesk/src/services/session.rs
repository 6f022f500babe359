//! # Session Store
//!
//! Explicit session object owning the opaque credential token. The token is
//! persisted to a JSON file in the working directory, loaded once on open,
//! and mirrored in memory for cheap reads on every request and every
//! protected-route check.
//!
//! The store is injected into the API client and consulted by the route
//! guard, so there is a single place the token lives instead of ambient
//! lookups scattered across components. Clones share the same in-memory
//! token and file path.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default session file path, relative to the working directory
const SESSION_FILE: &str = "./userdesk-session.json";

/// On-disk shape of the persisted session
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

/// Thread-safe, file-backed holder of the session token.
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Open a session store backed by `path`, loading any persisted token.
    ///
    /// A missing file means no session. An unreadable or malformed file is
    /// logged at warn and treated the same as a missing one.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = load_token(&path);
        if token.is_some() {
            tracing::info!(path = %path.display(), "Loaded persisted session");
        }
        Self {
            path,
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Open the store at the default working-directory path.
    pub fn open_default() -> Self {
        Self::open(SESSION_FILE)
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Presence of a token is treated as "authenticated"; no freshness or
    /// signature validation is performed locally.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Store a new token, persisting it before updating memory.
    pub fn set(&self, token: String) {
        let persisted = PersistedSession {
            token: token.clone(),
        };
        match serde_json::to_string_pretty(&persisted) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session");
            }
        }
        *self.token.write() = Some(token);
    }

    /// Drop the token and remove the session file.
    pub fn clear(&self) {
        *self.token.write() = None;
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove session file");
            }
        }
        tracing::info!("Session cleared");
    }
}

fn load_token(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read session file");
            return None;
        }
    };
    match serde_json::from_str::<PersistedSession>(&contents) {
        Ok(persisted) => Some(persisted.token),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Malformed session file, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_session_path() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "userdesk-session-test-{}-{}.json",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn open_without_file_is_unauthenticated() {
        let store = SessionStore::open(temp_session_path());
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn set_then_token_round_trips() {
        let path = temp_session_path();
        let store = SessionStore::open(&path);
        store.set("QpwL5tke4Pnpja7X4".to_string());

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("QpwL5tke4Pnpja7X4"));

        store.clear();
        assert!(!path.exists());
    }

    #[test]
    fn token_survives_reopen() {
        let path = temp_session_path();
        {
            let store = SessionStore::open(&path);
            store.set("persisted-token".to_string());
        }

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("persisted-token"));

        reopened.clear();
        assert!(!reopened.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_treated_as_absent() {
        let path = temp_session_path();
        std::fs::write(&path, "not json at all").expect("write test file");

        let store = SessionStore::open(&path);
        assert!(!store.is_authenticated());

        store.clear();
    }

    #[test]
    fn clones_share_the_same_token() {
        let path = temp_session_path();
        let store = SessionStore::open(&path);
        let clone = store.clone();

        store.set("shared-token".to_string());
        assert_eq!(clone.token().as_deref(), Some("shared-token"));

        clone.clear();
        assert!(!store.is_authenticated());
    }
}
