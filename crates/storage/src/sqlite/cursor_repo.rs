use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{CursorRecord, CursorRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl CursorRepository for SqliteRepository {
    async fn load_cursor(&self) -> Result<Option<CursorRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT
                position,
                updated_at
            FROM cursor_state
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let position: String = row
            .try_get("position")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let updated_at: chrono::DateTime<chrono::Utc> = row
            .try_get("updated_at")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(CursorRecord::new(position, updated_at)))
    }

    async fn save_cursor(&self, record: &CursorRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO cursor_state (id, position, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                position = excluded.position,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(&record.position)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
