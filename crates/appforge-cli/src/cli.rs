use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appforge")]
#[command(about = "Classify app generation requests and route them to a provider", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Classify a request and choose a provider")]
    Route {
        #[arg(help = "The request text to classify")]
        text: String,

        #[arg(short, long, help = "Active project the session is working on")]
        project: Option<String>,

        #[arg(
            long,
            default_value_t = 0,
            help = "Modifications already applied this session"
        )]
        modifications: u32,

        #[arg(long, help = "Provider preference (claude, gpt4, grok, hybrid)")]
        provider: Option<String>,

        #[arg(long, help = "Config file to use instead of ~/.appforge/config.toml")]
        config: Option<PathBuf>,

        #[arg(long, help = "Print the decision as JSON")]
        json: bool,
    },

    #[command(about = "Show configuration")]
    Config {
        #[arg(long, help = "Show full configuration including defaults")]
        full: bool,

        #[arg(long, help = "Config file to use instead of ~/.appforge/config.toml")]
        config: Option<PathBuf>,
    },

    #[command(about = "Show providers, their specialties, and fallback order")]
    Providers {
        #[arg(long, help = "Config file to use instead of ~/.appforge/config.toml")]
        config: Option<PathBuf>,
    },
}
