use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::notes::models::{NewAttachment, Note};

/// Service for persisting and retrieving notes.
pub struct NoteService {
    pool: PgPool,
}

impl NoteService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist one note and its attachments as a single unit.
    ///
    /// The note row and every attachment row are written inside one
    /// transaction: a failed attachment insert rolls back the note as well,
    /// so a half-written note is never observable. Attachments are inserted
    /// in input order. Returns the generated note ID.
    pub async fn ingest(
        &self,
        user_id: i64,
        details: &str,
        attachments: &[NewAttachment],
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let note_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO notes (user_id, details)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(details)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        for attachment in attachments {
            sqlx::query(
                r#"
                INSERT INTO attachments (note_id, file, filename, filetype)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(note_id)
            .bind(&attachment.file)
            .bind(&attachment.filename)
            .bind(&attachment.filetype)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert attachment '{}' for note {}: {:?}",
                    attachment.filename,
                    note_id,
                    e
                );
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Note ingested: id={}, user_id={}, attachments={}",
            note_id,
            user_id,
            attachments.len()
        );

        Ok(note_id)
    }

    pub async fn find_by_id(&self, note_id: i64) -> Result<Option<Note>> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, details, created_at
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(note_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
