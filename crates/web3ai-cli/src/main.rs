//! Web3AI CLI - demo runner and info server
//!
//! Usage:
//!     web3ai [OPTIONS] <COMMAND>
//!
//! Environment Variables (also read from the .env file):
//!     OPENAI_API_KEY: API key for the completion service
//!     OPENAI_API_BASE: API base URL (default: https://api.openai.com/v1)
//!     MODEL_NAME: Model name (default: gpt-3.5-turbo)
//!     NETWORK: Blockchain network reported by the info server (default: mainnet)
//!     APP_NAME: Application name (default: Web3AI API)
//!     DEBUG: Enable debug logging (default: false)
//!     HOST / PORT: Info server address (default: 0.0.0.0:8000)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use web3ai::{run_demo, serve, ClientHandle, Settings, DEFAULT_ENV_FILE};

/// Web3AI - AI helpers for blockchain education
#[derive(Parser, Debug)]
#[command(name = "web3ai")]
#[command(about = "Web3AI - AI helpers for blockchain education")]
#[command(after_help = r#"Examples:
    # Run the scripted demo
    web3ai demo

    # Start the info server on a custom port
    web3ai serve --port 8080

    # Explain a single concept
    web3ai explain "What is a Merkle tree?"

    # Analyze a contract from a file, or from stdin
    web3ai analyze contracts/Token.sol
    cat Token.sol | web3ai analyze -
"#)]
struct Cli {
    /// Dotenv file to read settings from
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the two-scenario demo
    Demo,

    /// Run the info HTTP server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Explain a Web3 concept
    Explain {
        /// Concept or question
        concept: String,
    },

    /// Analyze smart contract source
    Analyze {
        /// Contract source file, or '-' for stdin
        file: PathBuf,
    },
}

/// Install the tracing subscriber; RUST_LOG wins over the DEBUG setting
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read contract source from a path or stdin
fn read_contract(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read contract from stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read contract from {}", file.display()))
}

/// Print a generation result; errors are shown, not propagated
fn print_result(result: web3ai::Result<String>) {
    match result {
        Ok(text) => println!("{}", text),
        Err(e) => println!("{}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let settings = Settings::load(Some(args.env_file.as_path()));
    init_logging(settings.debug);
    tracing::debug!(?settings, "Loaded settings");

    match args.command {
        Command::Demo => {
            // The demo never fails the process.
            if let Err(e) = run_demo(&settings, &mut io::stdout()).await {
                tracing::error!("Demo output failed: {}", e);
            }
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| settings.host.clone());
            let port = port.unwrap_or(settings.port);
            let settings = settings.with_address(host, port);
            serve(Arc::new(settings))
                .await
                .context("Info server failed")?;
        }
        Command::Explain { concept } => {
            let client = ClientHandle::setup(&settings);
            print_result(client.explain(&concept).await);
        }
        Command::Analyze { file } => {
            let code = read_contract(&file)?;
            let client = ClientHandle::setup(&settings);
            print_result(client.analyze(&code).await);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["web3ai", "serve", "--port", "9000"]);
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn test_parse_global_env_file_after_subcommand() {
        let cli = Cli::parse_from(["web3ai", "demo", "--env-file", "custom.env"]);
        assert!(matches!(cli.command, Command::Demo));
        assert_eq!(cli.env_file, PathBuf::from("custom.env"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
