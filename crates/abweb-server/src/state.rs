//! Session-scoped application state.

use std::collections::HashMap;
use std::sync::RwLock;

use axum::http::StatusCode;

use abweb_graph::store::Web;

/// Application state shared across handlers.
///
/// One [`Web`] per session, created lazily on first touch. The map itself
/// is behind a lock because the HTTP layer may serve different sessions
/// concurrently; each store is still mutated by one request at a time while
/// the lock is held.
#[derive(Debug, Default)]
pub struct AppState {
    sessions: RwLock<HashMap<String, Web>>,
}

impl AppState {
    /// Create an empty state with no sessions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a closure against the named session's store, creating the
    /// session if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a 500 response if the lock was poisoned by a panicking
    /// handler.
    pub fn with_session<R>(
        &self,
        session: &str,
        f: impl FnOnce(&mut Web) -> R,
    ) -> Result<R, (StatusCode, String)> {
        let mut sessions = self.sessions.write().map_err(|_| {
            (StatusCode::INTERNAL_SERVER_ERROR, "session state poisoned".to_owned())
        })?;
        let web = sessions.entry(session.to_owned()).or_default();
        Ok(f(web))
    }

    /// Number of live sessions.
    ///
    /// # Errors
    ///
    /// Returns a 500 response if the lock was poisoned.
    pub fn session_count(&self) -> Result<usize, (StatusCode, String)> {
        self.sessions
            .read()
            .map(|sessions| sessions.len())
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "session state poisoned".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_created_lazily() {
        let state = AppState::new();
        assert_eq!(state.session_count().expect("lock healthy"), 0);

        state.with_session("a", |web| web.set_root("Q0")).expect("lock healthy");
        assert_eq!(state.session_count().expect("lock healthy"), 1);

        // Touching the same session does not create another.
        state.with_session("a", |web| web.node_count()).expect("lock healthy");
        assert_eq!(state.session_count().expect("lock healthy"), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let state = AppState::new();
        state.with_session("a", |web| web.set_root("Q0")).expect("lock healthy");

        let other_is_empty =
            state.with_session("b", |web| web.is_empty()).expect("lock healthy");
        assert!(other_is_empty);
    }
}
