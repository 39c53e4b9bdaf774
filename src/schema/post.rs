use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

use super::WriteError;
use crate::database::{self, Connection, ErrorExt};
use crate::types::form::posts::{self, CreatePost, UpdatePost};

#[derive(Debug, FromRow, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Post {
    #[tracing::instrument(skip_all)]
    pub async fn all(conn: &mut Connection) -> database::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "posts" ORDER BY id"#)
            .fetch_all(conn)
            .await
            .into_db_error()
    }

    #[tracing::instrument(skip(conn))]
    pub async fn by_id(conn: &mut Connection, id: i64) -> database::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "posts" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(conn)
            .await
            .into_db_error()
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(conn: &mut Connection, form: &CreatePost) -> Result<Self, WriteError> {
        form.validate()?;

        // validate() rejects absent categories, so the bind below
        // never actually inserts NULL
        let post = sqlx::query_as::<_, Self>(
            r#"INSERT INTO "posts" (title, content, summary, category)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(&form.title)
        .bind(form.content.as_deref())
        .bind(form.summary.as_deref())
        .bind(form.category.as_deref())
        .fetch_one(conn)
        .await
        .into_db_error()?;

        Ok(post)
    }

    /// Merges a partial update over the current row. Absent fields keep
    /// their value; a field that is optional in the row stays cleared
    /// only when it was never set.
    fn merged<'a>(
        &'a self,
        changes: &'a UpdatePost,
    ) -> (&'a str, Option<&'a str>, Option<&'a str>, &'a str) {
        (
            changes.title.as_deref().unwrap_or(&self.title),
            changes.content.as_deref().or(self.content.as_deref()),
            changes.summary.as_deref().or(self.summary.as_deref()),
            changes.category.as_deref().unwrap_or(&self.category),
        )
    }

    /// Overwrites the provided fields, re-validating the merged row
    /// before the update. Refreshes `updated_at`.
    #[tracing::instrument(skip_all)]
    pub async fn apply(
        &self,
        conn: &mut Connection,
        changes: &UpdatePost,
    ) -> Result<Self, WriteError> {
        let (title, content, summary, category) = self.merged(changes);
        posts::validate_fields(title, content, summary, Some(category))?;

        let post = sqlx::query_as::<_, Self>(
            r#"UPDATE "posts"
               SET title = $1, content = $2, summary = $3, category = $4, updated_at = now()
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(title)
        .bind(content)
        .bind(summary)
        .bind(category)
        .bind(self.id)
        .fetch_one(conn)
        .await
        .into_db_error()?;

        Ok(post)
    }

    /// Removes the row if it exists. Callers that want the delete to be
    /// an idempotent no-op simply ignore the returned row count.
    #[tracing::instrument(skip(conn))]
    pub async fn delete(conn: &mut Connection, id: i64) -> database::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM "posts" WHERE id = $1"#)
            .bind(id)
            .execute(conn)
            .await
            .into_db_error()?;

        Ok(result.rows_affected())
    }
}
