use std::path::Path;

use anyhow::{Context, Result};
use jetset_runtime::{Config, resolve_data_dir};

use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{self, LogTarget};
use crate::types::OutputFormat;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Browse);

    let log_target = match command {
        Commands::Browse => LogTarget::File(data_dir.join("jetset.log")),
        _ => LogTarget::Stderr,
    };
    logging::init_logging(cli.log_level, log_target)?;

    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let json = cli.format == OutputFormat::Json;

    match command {
        Commands::Browse => {
            let endpoint = feed_endpoint(&data_dir, cli.feed.as_deref())?;
            handlers::browse::handle(&endpoint)
        }

        Commands::List { sort, airline } => {
            let endpoint = feed_endpoint(&data_dir, cli.feed.as_deref())?;
            handlers::list::handle(&endpoint, sort.map(Into::into), airline, json)
        }

        Commands::Airlines => {
            let endpoint = feed_endpoint(&data_dir, cli.feed.as_deref())?;
            handlers::airlines::handle(&endpoint, json)
        }

        Commands::Init { endpoint, force } => {
            handlers::init::handle(&data_dir, endpoint.or(cli.feed), force, json)
        }
    }
}

/// `--feed`, else `config.toml`, else the built-in default
fn feed_endpoint(data_dir: &Path, override_endpoint: Option<&str>) -> Result<String> {
    let config_path = Config::path_in(data_dir);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    Ok(config.endpoint(override_endpoint).to_string())
}
