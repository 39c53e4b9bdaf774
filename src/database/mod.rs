use error_stack::{Report, ResultExt};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::{str::FromStr, time::Duration};

use crate::config;

mod error;
pub mod setup;

pub use error::*;

pub type Transaction<'a> = sqlx::Transaction<'a, sqlx::Postgres>;
pub type PoolConnection = sqlx::pool::PoolConnection<sqlx::Postgres>;
pub type Connection = sqlx::PgConnection;

/// Postgres connection pool behind every entity-store operation.
///
/// Connections are established lazily so the process can come up while
/// the database is still warming; an unhealthy pool at startup is
/// tolerated and surfaces later as [`Error::UnhealthyPool`].
#[derive(Clone)]
pub struct Pool {
    pool: sqlx::PgPool,
}

impl Pool {
    pub async fn new(cfg: &config::Database) -> Result<Self> {
        let pool = Self::connect_lazy_inner(cfg)?;

        match pool.wait_until_healthy().await {
            Ok(..) => {}
            Err(err) if err.is_unhealthy() => {}
            Err(err) => return Err(err),
        }

        Ok(pool)
    }

    /// Builds a pool without probing the database. Queries will fail
    /// until the connection string actually resolves; tests that never
    /// reach the database use this.
    #[must_use]
    pub fn connect_lazy(cfg: &config::Database) -> Self {
        match Self::connect_lazy_inner(cfg) {
            Ok(pool) => pool,
            Err(error) => panic!("invalid test database url: {error:?}"),
        }
    }

    fn connect_lazy_inner(cfg: &config::Database) -> Result<Self> {
        let pool_opts = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(cfg.timeout_secs.get()))
            .max_connections(cfg.pool_size.get());

        let mut connect_opts =
            PgConnectOptions::from_str(cfg.url.as_str()).change_context(Error::InvalidUrl)?;

        if cfg.enforce_tls {
            connect_opts = connect_opts.ssl_mode(PgSslMode::Prefer);
        }

        Ok(Self {
            pool: pool_opts.connect_lazy_with(connect_opts),
        })
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pool.fmt(f)
    }
}

impl Pool {
    #[inline(always)]
    pub fn connections(&self) -> u32 {
        self.pool.size()
    }

    #[inline(always)]
    pub fn is_healthy(&self) -> bool {
        self.connections() > 0
    }

    #[tracing::instrument(name = "db.transaction", skip(self))]
    pub async fn begin(&self) -> Result<Transaction<'_>> {
        if let Some(inner) = self.pool.try_begin().await.into_db_error()? {
            Ok(inner)
        } else if !self.is_healthy() {
            Err(Error::UnhealthyPool.into())
        } else {
            self.pool
                .begin()
                .await
                .map_err(|e| Report::new(Error::Internal(e)))
        }
    }

    #[tracing::instrument(name = "db.connect", skip(self))]
    pub async fn get(&self) -> Result<PoolConnection> {
        if let Some(inner) = self.pool.try_acquire() {
            Ok(inner)
        } else if !self.is_healthy() {
            Err(Error::UnhealthyPool.into())
        } else {
            self.pool
                .acquire()
                .await
                .map_err(|e| Report::new(Error::Internal(e)))
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn wait_until_healthy(&self) -> Result<()> {
        match self.pool.acquire().await {
            Ok(..) => Ok(()),
            Err(e) if !self.is_healthy() => Err(e).change_context(Error::UnhealthyPool),
            Err(err) => Err(Report::new(Error::Internal(err))),
        }
    }
}
