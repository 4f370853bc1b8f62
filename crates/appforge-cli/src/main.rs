//! Command-line interface for the app generation request router.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod cli;
mod handlers;

use clap::Parser as _;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "appforge=info,appforge_routing=info,appforge_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Route {
            text,
            project,
            modifications,
            provider,
            config,
            json,
        } => {
            handlers::handle_route(&text, project, modifications, provider.as_deref(), config, json)?;
        }
        Commands::Config { full, config } => {
            handlers::handle_config(full, config)?;
        }
        Commands::Providers { config } => {
            handlers::handle_providers(config)?;
        }
    }

    Ok(())
}
