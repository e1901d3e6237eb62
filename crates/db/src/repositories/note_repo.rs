//! Repository for the `notes` table.

use notes_core::category::Category;
use notes_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, category, archived, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// `archived` is never bound; the column default keeps new notes active.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNote,
        category: Category,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(category.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes by archived state, oldest first.
    pub async fn list_by_archived(pool: &PgPool, archived: bool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE archived = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(archived)
            .fetch_all(pool)
            .await
    }

    /// List active (non-archived) notes.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        Self::list_by_archived(pool, false).await
    }

    /// List archived notes.
    pub async fn list_archived(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        Self::list_by_archived(pool, true).await
    }

    /// List active notes in a category. Archived notes are never returned.
    pub async fn list_active_by_category(
        pool: &PgPool,
        category: Category,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE category = $1 AND archived = FALSE
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(category.as_str())
            .fetch_all(pool)
            .await
    }

    /// Partially update a note, returning the updated row.
    ///
    /// Only `title`, `content` and `category` can change. Returns `None` when
    /// no note has the given ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
        category: Option<Category>,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                category = COALESCE($4, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(category.map(Category::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Flip the archived flag of a note in a single statement.
    ///
    /// Returns `None` (and writes nothing) when no note has the given ID.
    pub async fn toggle_archive(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET archived = NOT archived
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a note. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(note_id = id, rows = result.rows_affected(), "Note delete executed");
        Ok(result.rows_affected() > 0)
    }
}
