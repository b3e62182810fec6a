//! Demonstration script: one concept explanation and one contract analysis

use std::io::Write;
use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::model::{ClientHandle, UnconfiguredReason};

/// Concept explained in the first demo
pub const DEMO_CONCEPT: &str = "What is a blockchain consensus mechanism?";

/// Contract analysed in the second demo
pub const DEMO_CONTRACT: &str = r#"
    pragma solidity ^0.8.0;

    contract SimpleStorage {
        uint256 private data;

        function set(uint256 _data) public {
            data = _data;
        }

        function get() public view returns (uint256) {
            return data;
        }
    }
"#;

/// Run the demo against a client built from `settings`
///
/// Returns `Ok(())` without issuing any request when the client cannot be
/// configured; guidance is printed instead.
pub async fn run_demo<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    print_banner(out)?;
    let handle = ClientHandle::setup(settings);
    run_demo_with(&handle, out).await
}

/// Run the demo scenarios with an existing handle
pub async fn run_demo_with<W: Write>(handle: &ClientHandle, out: &mut W) -> Result<()> {
    if let Some(reason) = handle.unconfigured_reason() {
        print_setup_guidance(reason, out)?;
        return Ok(());
    }
    writeln!(out, "\u{2705} OpenAI client initialized successfully\n")?;

    // Demo 1: explain a concept
    writeln!(out, "\u{1F4DA} Demo 1: Explaining Web3 Concepts")?;
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "Question: {}\n", DEMO_CONCEPT)?;
    writeln!(out, "Thinking... \u{1F914}\n")?;
    out.flush()?;

    info!("Running concept explanation demo");
    let explanation = handle
        .explain(DEMO_CONCEPT)
        .await
        .unwrap_or_else(|e| e.to_string());
    writeln!(out, "AI Response:")?;
    writeln!(out, "{}\n", explanation)?;

    // Demo 2: analyse a contract
    writeln!(out, "\n\u{1F50D} Demo 2: Smart Contract Analysis")?;
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "Analyzing sample Solidity contract...\n")?;
    writeln!(out, "Thinking... \u{1F914}\n")?;
    out.flush()?;

    info!("Running contract analysis demo");
    let analysis = handle
        .analyze(DEMO_CONTRACT)
        .await
        .unwrap_or_else(|e| e.to_string());
    writeln!(out, "AI Analysis:")?;
    writeln!(out, "{}\n", analysis)?;

    writeln!(out, "\n\u{2705} Demo completed successfully!")?;
    writeln!(out, "{}", "=".repeat(50))?;
    Ok(())
}

fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\u{1F680} Web3AI Rust Demo")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;
    Ok(())
}

fn print_setup_guidance<W: Write>(reason: UnconfiguredReason, out: &mut W) -> Result<()> {
    match reason {
        UnconfiguredReason::MissingApiKey => {
            writeln!(out, "\u{26A0}\u{FE0F}  Warning: OpenAI API key not configured!")?;
            writeln!(out, "\n\u{1F4A1} To run this demo:")?;
            writeln!(out, "   1. Set OPENAI_API_KEY in your .env file")?;
            writeln!(out, "   2. Get an API key from: https://platform.openai.com/api-keys")?;
            writeln!(out, "   3. Run again: web3ai demo")?;
        }
        UnconfiguredReason::InvalidApiKey => {
            writeln!(out, "\u{26A0}\u{FE0F}  Warning: OpenAI API key is malformed!")?;
            writeln!(out, "\n\u{1F4A1} To run this demo:")?;
            writeln!(out, "   1. Check OPENAI_API_KEY for stray quotes or control characters")?;
            writeln!(out, "   2. Run again: web3ai demo")?;
        }
        UnconfiguredReason::ProviderUnavailable => {
            writeln!(out, "\u{274C} Error: OpenAI support not compiled in")?;
            writeln!(out, "   Rebuild with: cargo build --features openai")?;
        }
    }
    Ok(())
}
