use std::time::Duration;

use clap::Parser;
use spatrem_core::domain::common::{SparqlConfig, SpatremConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "spatrem-api", version, about = "Spaces of Translation knowledge base API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub sparql: SparqlArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SparqlArgs {
    /// Address of the SPARQL query endpoint.
    #[arg(long = "sparql-endpoint", env = "SPARQL_ENDPOINT")]
    pub endpoint: String,

    #[arg(long = "sparql-timeout-secs", env = "SPARQL_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Retries after a transient failure, at most 10.
    #[arg(
        long = "sparql-max-retries",
        env = "SPARQL_MAX_RETRIES",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(0..=10)
    )]
    pub max_retries: u32,

    #[arg(long = "sparql-retry-backoff-ms", env = "SPARQL_RETRY_BACKOFF_MS", default_value_t = 200)]
    pub retry_backoff_ms: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<SparqlArgs> for SparqlConfig {
    fn from(args: SparqlArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            timeout: Duration::from_secs(args.timeout_secs),
            max_retries: args.max_retries,
            retry_backoff: Duration::from_millis(args.retry_backoff_ms),
        }
    }
}

impl From<Args> for SpatremConfig {
    fn from(args: Args) -> Self {
        Self {
            sparql: args.sparql.into(),
        }
    }
}
