use error_stack::Result;
use thiserror::Error;
use tokio::time::Instant;
use tracing::info;

use super::{Connection, ErrorExt};

#[derive(Debug, Error)]
#[error("Failed to set up database schema")]
pub struct SetupError;

// There is no migrations system; the whole schema is two tables
// created on boot when absent. The UNIQUE constraint on authors.name
// is the real uniqueness guarantee, the validation-time lookup is
// only a fast path.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS "authors" (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        phone_number TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT now(),
        updated_at TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS "posts" (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT,
        summary TEXT,
        category TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT now(),
        updated_at TIMESTAMP
    )"#,
];

/// Creates the `authors` and `posts` tables if they do not exist yet.
#[tracing::instrument(skip_all, name = "db.setup")]
pub async fn create_schema(conn: &mut Connection) -> Result<(), SetupError> {
    use error_stack::ResultExt;

    let now = Instant::now();
    info!("Setting up database schema...");

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .into_db_error()
            .change_context(SetupError)?;
    }

    let elapsed = now.elapsed();
    info!("Database schema is ready! took {elapsed:.2?}");

    Ok(())
}
