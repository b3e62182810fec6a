//! Model client module for AI inference
//!
//! This module provides:
//! - `client`: the client handle and the two generation operations
//! - `backend`: completion backends (OpenAI-compatible by default)
//! - `prompts`: prompt templates and generation parameters

mod backend;
mod client;
mod prompts;

#[cfg(feature = "openai")]
pub use backend::OpenAiBackend;
pub use backend::{BackendError, CompletionBackend};
pub use client::{ClientHandle, UnconfiguredReason, Web3AiClient};
pub use prompts::{PromptKind, PromptRequest};
