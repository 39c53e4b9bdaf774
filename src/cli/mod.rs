use clap::Parser;
use error_stack::{Result, ResultExt};
use std::net::IpAddr;
use std::num::NonZeroUsize;

use scoop::config;
use scoop::http::server::StartServerError;

/// Command line options for the scoop blog backend.
#[derive(Debug, Parser)]
#[command(about = "Minimal clickbait blog API server", version, author)]
pub struct Cli {
    #[clap(long)]
    pub address: Option<IpAddr>,
    #[clap(long)]
    pub port: Option<u16>,
    #[clap(long)]
    pub workers: Option<NonZeroUsize>,
}

impl Cli {
    pub fn run(self) -> Result<(), StartServerError> {
        let mut config = config::Server::load().change_context(StartServerError)?;
        self.override_config(&mut config);

        init_tracing();

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(config.workers.get())
            .build()
            .change_context(StartServerError)
            .attach_printable("could not build tokio runtime")?
            .block_on(scoop::http::run(config))
    }

    // cli flags win over whatever the environment or the config
    // file said
    fn override_config(&self, config: &mut config::Server) {
        if let Some(address) = self.address {
            config.ip = address;
        }

        if let Some(port) = self.port {
            config.port = port;
        }

        if let Some(workers) = self.workers {
            config.workers = workers;
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
