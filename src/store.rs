//! Concurrency-safe registry of live sessions.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock, TryLockError};
use std::time::{Duration, Instant};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::{SessionError, SessionState};

/// Opaque, unguessable session identifier: 128 random bits, hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, rand::Error> {
        let mut buf = [0_u8; 16];
        rng.try_fill_bytes(&mut buf)?;
        Ok(Self(hex::encode(buf)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A session id together with a copy of its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub state: SessionState,
}

#[derive(Debug)]
struct Entry {
    state: SessionState,
    last_used: Instant,
}

/// Live sessions keyed by id.
///
/// The map sits behind a `RwLock` and each session behind its own `Mutex`:
/// every read-modify-write on one session is atomic, and work on different
/// sessions only contends for the short map lookup.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Entry>>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session under a fresh random id from the OS RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IdGeneration`] if the OS RNG fails.
    pub fn create(&self, state: SessionState) -> Result<SessionId, SessionError> {
        self.create_with_rng(state, &mut OsRng)
    }

    pub(crate) fn create_with_rng<R: RngCore + ?Sized>(
        &self,
        state: SessionState,
        rng: &mut R,
    ) -> Result<SessionId, SessionError> {
        let entry = Arc::new(Mutex::new(Entry {
            state,
            last_used: Instant::now(),
        }));
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        loop {
            let id = SessionId::random(rng).map_err(|err| {
                tracing::warn!(error = %err, "session id generation failed");
                SessionError::IdGeneration {
                    reason: err.to_string(),
                }
            })?;
            if !sessions.contains_key(id.as_str()) {
                sessions.insert(id.0.clone(), entry);
                return Ok(id);
            }
        }
    }

    /// Run `f` with exclusive access to one session's state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownSession`] if no such session exists.
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Result<R, SessionError> {
        let entry = self.lookup(id)?;
        let mut entry = entry.lock().unwrap_or_else(PoisonError::into_inner);
        entry.last_used = Instant::now();
        Ok(f(&mut entry.state))
    }

    /// A copy of one session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownSession`] if no such session exists.
    pub fn get(&self, id: &str) -> Result<Session, SessionError> {
        let state = self.with_session(id, |state| state.clone())?;
        Ok(Session {
            id: SessionId(id.to_owned()),
            state,
        })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.read_map().contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_map().is_empty()
    }

    /// Remove sessions not touched for longer than `max_idle`. Sessions in use
    /// right now are kept. Returns how many were removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, entry| {
            // A caller between lookup and lock still holds a clone.
            if Arc::strong_count(entry) > 1 {
                return true;
            }
            match entry.try_lock() {
                Ok(entry) => entry.last_used.elapsed() <= max_idle,
                Err(TryLockError::Poisoned(poisoned)) => {
                    poisoned.into_inner().last_used.elapsed() <= max_idle
                }
                Err(TryLockError::WouldBlock) => true,
            }
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    fn lookup(&self, id: &str) -> Result<Arc<Mutex<Entry>>, SessionError> {
        self.read_map()
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownSession { id: id.to_owned() })
    }

    fn read_map(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<Mutex<Entry>>>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    fn state() -> SessionState {
        SessionState {
            secret: 1,
            candidates: vec![1, 2],
            history: Vec::new(),
            guesses_remaining: 10,
            status: Status::Playing,
            revealed: None,
        }
    }

    #[test]
    fn ids_are_128_bit_hex() {
        let store = SessionStore::new();
        let id = store.create(state()).unwrap();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_are_unique() {
        let store = SessionStore::new();
        let a = store.create(state()).unwrap();
        let b = store.create(state()).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_returns_copy() {
        let store = SessionStore::new();
        let id = store.create(state()).unwrap();
        let session = store.get(id.as_str()).unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.state, state());
    }

    #[test]
    fn unknown_session() {
        let store = SessionStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("abc"));
        assert_eq!(
            store.get("abc").unwrap_err(),
            SessionError::UnknownSession { id: "abc".into() }
        );
    }

    #[test]
    fn with_session_mutates_in_place() {
        let store = SessionStore::new();
        let id = store.create(state()).unwrap();
        store
            .with_session(id.as_str(), |s| s.guesses_remaining = 4)
            .unwrap();
        assert_eq!(store.get(id.as_str()).unwrap().state.guesses_remaining(), 4);
    }

    #[test]
    fn evict_idle_keeps_fresh_sessions() {
        let store = SessionStore::new();
        let id = store.create(state()).unwrap();
        assert_eq!(store.evict_idle(Duration::from_secs(3600)), 0);
        assert!(store.contains(id.as_str()));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.evict_idle(Duration::ZERO), 1);
        assert!(!store.contains(id.as_str()));
    }

    #[test]
    fn evict_idle_skips_sessions_being_looked_up() {
        let store = SessionStore::new();
        let id = store.create(state()).unwrap();
        std::thread::sleep(Duration::from_millis(5));

        let in_flight = store.lookup(id.as_str()).unwrap();
        assert_eq!(store.evict_idle(Duration::ZERO), 0);
        assert!(store.contains(id.as_str()));

        drop(in_flight);
        assert_eq!(store.evict_idle(Duration::ZERO), 1);
    }

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    #[test]
    fn rng_failure_is_an_error() {
        let store = SessionStore::new();
        let err = store.create_with_rng(state(), &mut BrokenRng).unwrap_err();
        assert!(matches!(err, SessionError::IdGeneration { .. }));
        assert!(!err.is_caller_error());
        assert!(store.is_empty());
    }
}
