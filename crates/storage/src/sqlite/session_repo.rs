use async_trait::async_trait;
use chrono::{DateTime, Utc};
use offerboard_core::model::SessionState;
use sqlx::Row;

use crate::repository::{SessionRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn load_state(&self) -> Result<SessionState, StorageError> {
        let row = sqlx::query(
            r"
            SELECT authenticated
            FROM session
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(SessionState::LoggedOut);
        };

        let authenticated: i64 = row
            .try_get("authenticated")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(SessionState::restored(authenticated != 0))
    }

    async fn set_authenticated(&self, at: DateTime<Utc>) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO session (id, authenticated, updated_at)
            VALUES (1, 1, ?1)
            ON CONFLICT(id) DO UPDATE SET
                authenticated = excluded.authenticated,
                updated_at = excluded.updated_at
            ",
        )
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
