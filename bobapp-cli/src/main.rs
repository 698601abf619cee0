//! BobApp CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the joke API server

mod server;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bobapp")]
#[command(about = "BobApp joke API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the joke API server
    Serve(server::ServerArgs),
}

/// Env var switching log output to JSON when set to "1"
const LOG_JSON_ENV: &str = "BOBAPP_LOG_JSON";

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var(LOG_JSON_ENV).ok().as_deref() == Some("1");
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_target(true).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args),
    }
}
