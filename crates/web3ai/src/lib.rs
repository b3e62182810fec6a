//! web3ai: chat-completion facade for blockchain education
//!
//! This library provides:
//! - Settings resolved from a `.env` file and the process environment
//! - A client handle over an OpenAI-compatible chat-completion service
//! - Two generation tasks: smart contract analysis and Web3 concept explanation
//! - A scripted demo running both tasks
//! - A small HTTP service exposing health and info endpoints
//!
//! # Example
//!
//! ```no_run
//! use web3ai::{ClientHandle, Settings};
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = Settings::load(None);
//!     let client = ClientHandle::setup(&settings);
//!
//!     match client.explain("What is a Merkle tree?").await {
//!         Ok(text) => println!("{}", text),
//!         Err(e) => println!("{}", e),
//!     }
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod demo;
pub mod model;
pub mod server;

// Re-export commonly used types and functions
pub use error::{Result, Web3AiError};

// Config re-exports
pub use config::{Settings, API_KEY_PLACEHOLDER, DEFAULT_ENV_FILE};

// Model re-exports
pub use model::{
    BackendError, ClientHandle, CompletionBackend, PromptKind, PromptRequest, UnconfiguredReason,
    Web3AiClient,
};

// Demo re-exports
pub use demo::{run_demo, run_demo_with, DEMO_CONCEPT, DEMO_CONTRACT};

// Server re-exports
pub use server::{create_router, serve, serve_with_listener, API_VERSION};
