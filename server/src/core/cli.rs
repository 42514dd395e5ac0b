use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    ENV_CONFIG, ENV_HOST, ENV_MOCK_SEED, ENV_NO_DELAY, ENV_PORT, ENV_STRICT_FILTERS,
};

#[derive(Parser)]
#[command(name = "traderboard")]
#[command(version, about = "Crypto trader leaderboard API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Seed for mock data (same data on every request)
    #[arg(long, global = true, env = ENV_MOCK_SEED)]
    pub seed: Option<u64>,

    /// Number of traders on the leaderboard
    #[arg(long, global = true)]
    pub traders_count: Option<usize>,

    /// Number of trades in a trade history
    #[arg(long, global = true)]
    pub trades_count: Option<usize>,

    /// Disable the artificial response delay
    #[arg(long, global = true, env = ENV_NO_DELAY)]
    pub no_delay: bool,

    /// Reject filter bounds that are not numbers (400) instead of matching nothing
    #[arg(
        long,
        global = true,
        env = ENV_STRICT_FILTERS,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub strict_filters: Option<bool>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// Print one generated payload as JSON
    Sample {
        #[command(subcommand)]
        kind: SampleKind,
    },
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum SampleKind {
    /// Leaderboard rows
    Traders,
    /// A trader profile
    Profile {
        /// Address echoed back in the profile
        address: String,
    },
    /// A trade history
    Trades,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub traders_count: Option<usize>,
    pub trades_count: Option<usize>,
    pub no_delay: bool,
    pub strict_filters: Option<bool>,
}

fn split(cli: Cli) -> (CliConfig, Option<Commands>) {
    let config = CliConfig {
        host: cli.host,
        port: cli.port,
        config: cli.config,
        seed: cli.seed,
        traders_count: cli.traders_count,
        trades_count: cli.trades_count,
        no_delay: cli.no_delay,
        strict_filters: cli.strict_filters,
    };
    (config, cli.command)
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    split(Cli::parse())
}
