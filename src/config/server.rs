use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use validator::{Validate, ValidateError};

use super::ParseError;
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

#[derive(Debug, Deserialize)]
pub struct Server {
    /// Address the HTTP listener binds to.
    ///
    /// **Environment variables**:
    /// - `SCOOP_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// **Environment variables**:
    /// - `SCOOP_PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    /// Amount of actix worker threads serving requests.
    ///
    /// **Environment variables**:
    /// - `SCOOP_WORKERS`
    #[serde(default = "Server::default_workers")]
    pub workers: NonZeroUsize,
    pub db: super::Database,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(ParseError)?;

        Ok(config)
    }

    /// Baseline configuration for tests. The default connection
    /// string parses but points nowhere; tests that talk to a live
    /// database overwrite `db.url` first.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            ip: Self::default_ip(),
            port: Self::default_port(),
            workers: Self::default_workers(),
            db: super::Database {
                url: String::from("postgres://postgres@localhost:5432/scoop_test").into(),
                pool_size: super::Database::default_pool_size(),
                timeout_secs: super::Database::default_timeout_secs(),
                enforce_tls: false,
            },
        }
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &'static str = "scoop.yml";
    const DEFAULT_PORT: u16 = 3000;

    const fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }

    fn default_workers() -> NonZeroUsize {
        std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    }

    /// Creates a default [`figment::Figment`] object to load server
    /// configuration. This function is there for implementing
    /// [`Server::load`] and testing.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Yaml},
            Figment,
        };

        Figment::new()
            .merge(Yaml::file(Self::DEFAULT_CONFIG_FILE))
            // One big con about figment (env provider to be specific) especially
            // these fields with underscore in it.
            .merge(Env::prefixed("SCOOP_").map(|v| match v.as_str() {
                "DB_POOL_SIZE" => "db.pool_size".into(),
                "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
                "DB_ENFORCE_TLS" => "db.enforce_tls".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
            // Environment variable aliases
            .merge(Env::raw().map(|v| match v.as_str() {
                "DATABASE_URL" => "db.url".into(),
                _ => v.into(),
            }))
    }
}

impl Validate for Server {
    // `Result` is taken by the error_stack alias in this module
    fn validate(&self) -> std::result::Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        if let Err(error) = self.db.validate() {
            fields.insert("db", error);
        }
        fields.build().into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::num::{NonZeroU32, NonZeroU64};

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "hello world!");

            jail.set_env("SCOOP_IP", "0.0.0.0");
            jail.set_env("SCOOP_PORT", "8123");
            jail.set_env("SCOOP_WORKERS", "4");

            jail.set_env("SCOOP_DB_POOL_SIZE", "100");
            jail.set_env("SCOOP_DB_TIMEOUT_SECS", "3030");
            jail.set_env("SCOOP_DB_ENFORCE_TLS", "false");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.db.url.as_str(), "hello world!");
            assert_eq!(config.db.pool_size, NonZeroU32::new(100).unwrap());
            assert_eq!(config.db.timeout_secs, NonZeroU64::new(3030).unwrap());
            assert_eq!(config.db.enforce_tls, false);

            assert_eq!(config.ip.to_string(), "0.0.0.0");
            assert_eq!(config.port, 8123);
            assert_eq!(config.workers, NonZeroUsize::new(4).unwrap());

            Ok(())
        });
    }

    // the DATABASE_URL alias is merged last on purpose, so it wins
    // over SCOOP_DB_URL when both are set
    #[test]
    fn database_url_alias_wins() {
        Jail::expect_with(|jail| {
            jail.set_env("SCOOP_DB_URL", "postgres://primary");
            jail.set_env("DATABASE_URL", "postgres://alias");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.db.url.as_str(), "postgres://alias");

            Ok(())
        });
    }

    #[test]
    fn empty_url_fails_validation() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "");

            let config: Server = Server::figment().extract()?;
            assert!(config.validate().is_err());

            Ok(())
        });
    }
}
