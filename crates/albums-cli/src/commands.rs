use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use albums_server::{AlbumServer, ServerConfig};
use albums_types::Album;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Seed(args) => cmd_seed(args),
        Command::Config(args) => cmd_config(args),
    }
}

/// Defaults, then the config file, then command-line overrides.
pub fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.no_graceful_shutdown {
        config.graceful_shutdown = false;
    }
    Ok(config)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    tracing::debug!(?config, "resolved server configuration");
    println!(
        "{} Serving {} albums on {}",
        "▶".green().bold(),
        config.seed.to_string().cyan(),
        config.bind_addr.to_string().bold()
    );
    AlbumServer::new(config)
        .serve()
        .await
        .context("album server failed")
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let albums = args.seed.albums();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&albums)?),
        OutputFormat::Text => print!("{}", render_albums(&albums)),
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn render_albums(albums: &[Album]) -> String {
    if albums.is_empty() {
        return "No albums.\n".into();
    }
    albums
        .iter()
        .map(|album| {
            format!(
                "{:>6}  {}  {}  {}\n",
                album.id.as_str().yellow(),
                album.title.bold(),
                album.artist.dimmed(),
                format!("{:.2}", album.price).green()
            )
        })
        .collect()
}
