//! CLI entry point for minipress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minipress")]
#[command(version)]
#[command(about = "A small markdown blog engine with protected posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the post collection and start the blog server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Validate that every source document builds
    Check,

    /// List the built posts
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "minipress=debug,info"
    } else {
        "minipress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let app = minipress::Minipress::new(&base_dir)?;

    match cli.command {
        Commands::Serve { port, ip } => {
            tracing::info!("starting blog server at http://{}:{}", ip, port);
            minipress::server::start(&app, &ip, port).await?;
        }

        Commands::Check => {
            minipress::commands::check::run(&app)?;
        }

        Commands::List { json } => {
            minipress::commands::list::run(&app, json)?;
        }
    }

    Ok(())
}
