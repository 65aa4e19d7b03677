//! Command-line interface.
//!
//! Every flag that has an environment variable can also be set in a `.env`
//! file next to the binary or in the working directory.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_GEOCODER_URL, DEFAULT_LISTEN_ADDR, DEFAULT_METADATA_URL,
};
use crate::config::types::{LogFormat, LogLevel, PollerConfig, ServerConfig};

/// Location relay and country metadata proxy for map-game sessions.
#[derive(Debug, Parser)]
#[command(name = "geowoot", version, about)]
pub struct Cli {
    /// Log level: error/warn/info/debug/trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Follow a running service and print each resolved place
    Watch(WatchArgs),
    /// Print the userscript for a given service URL
    Script(ScriptArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "GEOWOOT_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Public URL of this service, written into the userscript
    #[arg(long, env = "GEOWOOT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Base URL of the country metadata site
    #[arg(long, env = "GEOWOOT_METADATA_URL", default_value = DEFAULT_METADATA_URL)]
    pub metadata_url: String,

    /// Validate the metadata site's TLS certificate
    #[arg(long)]
    pub strict_tls: bool,

    /// Timeout for metadata requests in seconds (no timeout if omitted)
    #[arg(long)]
    pub upstream_timeout_secs: Option<u64>,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// URL of a running geowoot service
    #[arg(long, env = "GEOWOOT_SERVER", default_value = DEFAULT_BASE_URL)]
    pub server: String,

    /// Base URL of a Nominatim-compatible reverse geocoder
    #[arg(long, env = "GEOWOOT_GEOCODER_URL", default_value = DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// Seconds between polls
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,
}

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// URL the userscript should post to
    #[arg(long, env = "GEOWOOT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            listen_addr: args.listen,
            base_url: args.base_url,
            metadata_url: args.metadata_url,
            strict_tls: args.strict_tls,
            upstream_timeout: args.upstream_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl From<WatchArgs> for PollerConfig {
    fn from(args: WatchArgs) -> Self {
        Self {
            server_url: args.server,
            geocoder_url: args.geocoder_url,
            interval: Duration::from_secs(args.interval_secs),
        }
    }
}
