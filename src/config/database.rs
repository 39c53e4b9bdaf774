use serde::Deserialize;
use std::num::{NonZeroU32, NonZeroU64};
use validator::{Validate, ValidateError};

use crate::util::Sensitive;

/// Configuration for connecting to the Postgres database
#[derive(Debug, Deserialize)]
pub struct Database {
    /// Connection URL of the Postgres database.
    ///
    /// **Environment variables**:
    /// - `SCOOP_DB_URL` or `DATABASE_URL`
    pub url: Sensitive<String>,
    /// Maximum amount of connections the pool may hold open.
    ///
    /// **Environment variables**:
    /// - `SCOOP_DB_POOL_SIZE`
    #[serde(default = "Database::default_pool_size")]
    pub pool_size: NonZeroU32,
    /// How long this server can wait until its time limit where the
    /// database connection takes a while to acknowledge or
    /// successfully established.
    ///
    /// **Environment variables**:
    /// - `SCOOP_DB_TIMEOUT_SECS`
    #[serde(default = "Database::default_timeout_secs")]
    pub timeout_secs: NonZeroU64,
    /// Forces all database connections to be encrypted with TLS
    /// (if possible).
    ///
    /// **Environment variables**:
    /// - `SCOOP_DB_ENFORCE_TLS`
    #[serde(default = "Database::default_enforce_tls")]
    pub enforce_tls: bool,
}

impl Database {
    const DEFAULT_POOL_SIZE: u32 = 5;
    const DEFAULT_TIMEOUT_SECS: u64 = 5;

    // Required by serde
    pub(super) const fn default_pool_size() -> NonZeroU32 {
        match NonZeroU32::new(Self::DEFAULT_POOL_SIZE) {
            Some(n) => n,
            None => panic!("DEFAULT_POOL_SIZE is accidentally set to 0"),
        }
    }

    pub(super) const fn default_timeout_secs() -> NonZeroU64 {
        match NonZeroU64::new(Self::DEFAULT_TIMEOUT_SECS) {
            Some(n) => n,
            None => panic!("DEFAULT_TIMEOUT_SECS is accidentally set to 0"),
        }
    }

    const fn default_enforce_tls() -> bool {
        true
    }
}

impl Validate for Database {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("url", {
            let mut error = ValidateError::msg_builder();
            if self.url.as_str().is_empty() {
                error.insert("Connection URL must not be empty");
            }
            error.build()
        });
        fields.build().into_result()
    }
}
