use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use offerboard_core::Clock;
use offerboard_core::model::{Credentials, SessionState};
use storage::repository::SessionRepository;
use tracing::info;

use crate::error::AuthError;

/// Gates access to the dashboard behind the fixed credential pair and keeps
/// the durable session flag in sync with the in-memory state.
///
/// The credential check itself is local and synchronous; only the flag
/// persistence can fail.
pub struct AuthService {
    clock: Clock,
    accepted: Credentials,
    sessions: Arc<dyn SessionRepository>,
    authenticated: AtomicBool,
}

impl AuthService {
    #[must_use]
    pub fn new(clock: Clock, accepted: Credentials, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            clock,
            accepted,
            sessions,
            authenticated: AtomicBool::new(false),
        }
    }

    /// Restore the session persisted by a previous run.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the flag cannot be read.
    pub async fn restore(&self) -> Result<SessionState, AuthError> {
        let state = self.sessions.load_state().await?;
        self.authenticated
            .store(state.is_authenticated(), Ordering::Release);
        Ok(state)
    }

    /// Attempt to sign in.
    ///
    /// A mismatch in either field yields the same generic error and leaves
    /// both the in-memory state and the persisted flag untouched. On
    /// success the flag is written before the in-memory state flips.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Credentials` on mismatch, `AuthError::Storage`
    /// if the flag cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let state = self
            .state()
            .login_attempt(&self.accepted, username, password)?;
        self.sessions.set_authenticated(self.clock.now()).await?;
        self.authenticated
            .store(state.is_authenticated(), Ordering::Release);
        info!("operator signed in");
        Ok(())
    }

    /// Sign out and drop the persisted flag unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the flag cannot be cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear().await?;
        self.authenticated.store(false, Ordering::Release);
        info!("operator signed out");
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState::restored(self.authenticated.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }
}
