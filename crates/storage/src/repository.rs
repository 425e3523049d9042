use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use offerboard_core::model::SessionState;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the durable session flag.
///
/// The flag mirrors the operator's authentication status across restarts:
/// written on login, dropped on logout, read once at startup.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Read the persisted session state. No persisted flag reads as
    /// logged out.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be read.
    async fn load_state(&self) -> Result<SessionState, StorageError>;

    /// Persist the authenticated flag, stamped with the login time.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be written.
    async fn set_authenticated(&self, at: DateTime<Utc>) -> Result<(), StorageError>;

    /// Drop the persisted flag unconditionally. Clearing an absent flag is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be cleared.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    authenticated_at: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl InMemorySessionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn load_state(&self) -> Result<SessionState, StorageError> {
        let guard = self
            .authenticated_at
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(SessionState::restored(guard.is_some()))
    }

    async fn set_authenticated(&self, at: DateTime<Utc>) -> Result<(), StorageError> {
        let mut guard = self
            .authenticated_at
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(at);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .authenticated_at
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        Self { sessions }
    }
}
