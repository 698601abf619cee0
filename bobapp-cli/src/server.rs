//! Server command - start the joke API server
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: validation of the jokes file

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use bobapp_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// JSON file with jokes to serve instead of the bundled ones
    #[arg(long)]
    pub jokes: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting BobApp server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    if let Some(path) = &args.jokes {
        validate_jokes_file(path)?;
    }

    Ok(ServerConfig {
        port: args.port,
        jokes_file: args.jokes.clone(),
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(run_server(config))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Validate that the jokes file exists and is a regular file
fn validate_jokes_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Jokes file does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Jokes path exists but is not a file: {}", path.display());
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServerArgs {
            port: 8080,
            jokes: None,
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.jokes_file.is_none());
    }

    #[test]
    fn test_configure_server_missing_jokes_file() {
        let args = ServerArgs {
            port: 9000,
            jokes: Some(PathBuf::from("/nonexistent/jokes.json")),
        };

        assert!(configure_server(&args).is_err());
    }

    #[test]
    fn test_validate_jokes_file_rejects_directory() {
        let result = validate_jokes_file(&std::env::temp_dir());
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_serve() {
        let cli = crate::Cli::try_parse_from(["bobapp", "serve", "--port", "9090"]).unwrap();
        match cli.command {
            crate::Commands::Serve(args) => {
                assert_eq!(args.port, 9090);
                assert!(args.jokes.is_none());
            }
        }
    }
}
