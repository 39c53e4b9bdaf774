use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{config, database};

/// Shared handle passed into every request handler. Holds the loaded
/// configuration and the database pool; nothing in here is request-scoped.
#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    pub db: database::Pool,
}

#[derive(Debug, Error)]
#[error("Failed to initialize App struct")]
pub struct AppError;

impl App {
    #[tracing::instrument]
    pub async fn new(config: config::Server) -> Result<Self, AppError> {
        let db = database::Pool::new(&config.db)
            .await
            .change_context(AppError)?;

        Ok(Self {
            config: Arc::new(config),
            db,
        })
    }

    /// Creates an [`App`] backed by a lazy pool that never connects
    /// until a query actually runs. Handler tests that stop at the
    /// validation layer rely on this.
    #[must_use]
    pub fn new_for_tests() -> Self {
        let config = config::Server::for_tests();
        let db = database::Pool::connect_lazy(&config.db);

        Self {
            config: Arc::new(config),
            db,
        }
    }
}

impl App {
    /// Obtains a transaction from the pool. Every write path runs inside
    /// one of these, committed once per request.
    #[tracing::instrument(skip_all, name = "app.db_write")]
    pub async fn db_write(&self) -> Result<database::Transaction<'_>, database::Error> {
        self.db.begin().await
    }

    #[tracing::instrument(skip_all, name = "app.db_read")]
    pub async fn db_read(&self) -> Result<database::PoolConnection, database::Error> {
        self.db.get().await
    }
}
