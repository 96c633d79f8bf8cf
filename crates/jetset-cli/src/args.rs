use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jetset")]
#[command(about = "Browse a flight feed: sort by price, filter by airline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $JETSET_PATH or the XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Feed URL or file path (overrides config.toml)")]
    pub feed: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive catalog (default)
    Browse,

    /// Print the catalog once, optionally sorted and filtered
    List {
        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(long, help = "Exact, case-sensitive airline name")]
        airline: Option<String>,
    },

    /// Print the distinct airlines in the feed
    Airlines,

    /// Write config.toml into the data directory
    Init {
        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        force: bool,
    },
}
