//! Server-side session store.
//!
//! A session is a random token mapped to the authenticated identity. The
//! token travels in an HttpOnly cookie; the identity itself never leaves
//! the server. Sessions are held in memory and die with the process.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::auth::policy::Role;

pub const SESSION_COOKIE: &str = "poseidon_session";

/// The authenticated username and role bound to one client session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

struct Entry {
    identity: Identity,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Register a new session and return its token.
    pub fn create(&self, identity: Identity) -> String {
        let token = generate_token();
        self.inner.write().insert(
            token.clone(),
            Entry {
                identity,
                last_seen: Instant::now(),
            },
        );
        token
    }

    /// Resolve a token to its identity, refreshing the idle clock.
    /// Sessions idle past the configured timeout are dropped on lookup.
    pub fn get(&self, token: &str) -> Option<Identity> {
        let mut sessions = self.inner.write();
        if let Some(entry) = sessions.get_mut(token) {
            if entry.last_seen.elapsed() <= self.idle_timeout {
                entry.last_seen = Instant::now();
                return Some(entry.identity.clone());
            }
        }
        sessions.remove(token);
        None
    }

    /// Invalidate a session. Returns whether it existed.
    pub fn remove(&self, token: &str) -> bool {
        self.inner.write().remove(token).is_some()
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            username: "admin".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn create_then_get_returns_identity() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create(identity());
        assert_eq!(store.get(&token), Some(identity()));
    }

    #[test]
    fn tokens_are_unique_and_opaque() {
        let store = SessionStore::new(Duration::from_secs(60));
        let a = store.create(identity());
        let b = store.create(identity());
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn removed_sessions_are_dead() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create(identity());
        assert!(store.remove(&token));
        assert_eq!(store.get(&token), None);
        assert!(!store.remove(&token));
    }

    #[test]
    fn unknown_tokens_resolve_to_nothing() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert_eq!(store.get("deadbeef"), None);
    }

    #[test]
    fn idle_sessions_expire() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.create(identity());
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.get(&token), None);
    }
}
