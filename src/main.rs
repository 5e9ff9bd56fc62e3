mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use banter::config::BanterConfig;

#[derive(Parser)]
#[command(name = "banter", version, about = "Semantic intent-matching terminal chatbot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session
    Chat {
        /// Catalog file (TOML or JSON) overriding the configured one
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Match a single utterance and print the intent
    Match {
        /// The utterance to classify
        utterance: String,
        /// Catalog file (TOML or JSON) overriding the configured one
        #[arg(long)]
        catalog: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the embedding model
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
    /// Check model files and catalog health
    Doctor,
}

#[derive(Subcommand)]
enum ModelAction {
    /// Download the embedding model to ~/.banter/models/
    Download,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let mut config = BanterConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for the conversation.
    let filter = EnvFilter::try_new(&config.chat.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Chat { catalog } => {
            if let Some(path) = catalog {
                config.catalog.path = path;
            }
            cli::chat(&config)?;
        }
        Command::Match {
            utterance,
            catalog,
            json,
        } => {
            if let Some(path) = catalog {
                config.catalog.path = path;
            }
            cli::match_one::match_one(&config, &utterance, json)?;
        }
        Command::Model { action } => match action {
            ModelAction::Download => {
                cli::model_download(&config.embedding).await?;
            }
        },
        Command::Doctor => {
            cli::doctor::doctor(&config)?;
        }
    }

    Ok(())
}
