use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use albums_types::SeedCatalog;

#[derive(Parser)]
#[command(
    name = "albums",
    about = "In-memory record album service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the album HTTP server
    Serve(ServeArgs),
    /// Print a seed catalogue
    Seed(SeedArgs),
    /// Print the effective server configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Seed catalogue to start with: standard, catalog, or empty
    #[arg(long)]
    pub seed: Option<SeedCatalog>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Exit immediately on SIGINT/SIGTERM instead of draining requests
    #[arg(long)]
    pub no_graceful_shutdown: bool,
}

#[derive(Args)]
pub struct SeedArgs {
    #[arg(long, default_value_t = SeedCatalog::Standard)]
    pub seed: SeedCatalog,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
