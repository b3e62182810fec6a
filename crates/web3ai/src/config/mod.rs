//! Configuration module for web3ai
//!
//! This module contains:
//! - `settings`: Application settings resolved from a dotenv file and the environment

mod settings;

pub use settings::{Settings, API_KEY_PLACEHOLDER, DEFAULT_ENV_FILE};
