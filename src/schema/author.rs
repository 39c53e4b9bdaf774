use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use validator::{Validate, ValidateError};

use super::WriteError;
use crate::database::{self, Connection, ErrorExt};
use crate::types::form::authors::CreateAuthor;

/// A persisted author row. The derived [`Serialize`] impl is the API
/// shape; exactly these fields and nothing else leaves the process.
#[derive(Debug, FromRow, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Author {
    #[tracing::instrument(skip_all)]
    pub async fn all(conn: &mut Connection) -> database::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "authors" ORDER BY id"#)
            .fetch_all(conn)
            .await
            .into_db_error()
    }

    #[tracing::instrument(skip_all)]
    pub async fn by_name(conn: &mut Connection, name: &str) -> database::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "authors" WHERE name = $1"#)
            .bind(name)
            .fetch_optional(conn)
            .await
            .into_db_error()
    }

    /// Validates and inserts a new author.
    ///
    /// The name lookup is a fast path only; the UNIQUE constraint on
    /// `authors.name` decides under concurrency, and a violation there
    /// is reported as the same field error.
    #[tracing::instrument(skip_all)]
    pub async fn create(conn: &mut Connection, form: &CreateAuthor) -> Result<Self, WriteError> {
        form.validate()?;

        if Self::by_name(conn, &form.name).await?.is_some() {
            return Err(Self::duplicate_name_error().into());
        }

        let result = sqlx::query_as::<_, Self>(
            r#"INSERT INTO "authors" (name, phone_number)
               VALUES ($1, $2)
               RETURNING *"#,
        )
        .bind(&form.name)
        .bind(form.phone_number.as_deref())
        .fetch_one(conn)
        .await;

        match result {
            Err(sqlx::Error::Database(err))
                if err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Err(Self::duplicate_name_error().into())
            }
            other => Ok(other.into_db_error()?),
        }
    }

    fn duplicate_name_error() -> ValidateError {
        let mut msg = ValidateError::msg_builder();
        msg.insert("Name must be unique.");

        let mut fields = ValidateError::field_builder();
        fields.insert("name", msg.build());
        fields.build()
    }
}
