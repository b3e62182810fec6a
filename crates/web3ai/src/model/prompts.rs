//! Prompt templates for the two generation tasks

use serde::Serialize;

const CONTRACT_ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert in blockchain and smart contract security. Analyze smart contracts for potential vulnerabilities and best practices.";

const CONCEPT_EXPLANATION_SYSTEM_PROMPT: &str =
    "You are a Web3 educator. Explain blockchain and Web3 concepts in simple, clear terms.";

/// Which generation task a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PromptKind {
    ContractAnalysis,
    ConceptExplanation,
}

impl PromptKind {
    /// Prefix used when reporting a failed call
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Self::ContractAnalysis => "Error analyzing contract",
            Self::ConceptExplanation => "Error getting explanation",
        }
    }
}

/// A single chat-completion request: system and user text plus sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    pub kind: PromptKind,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl PromptRequest {
    /// Security review of a smart contract
    pub fn contract_analysis(code: &str) -> Self {
        Self {
            kind: PromptKind::ContractAnalysis,
            system_prompt: CONTRACT_ANALYSIS_SYSTEM_PROMPT.to_string(),
            user_prompt: format!("Analyze this smart contract code:\n\n{}", code),
            max_tokens: 300,
            temperature: 0.5,
        }
    }

    /// Plain-language explanation of a Web3 concept
    pub fn concept_explanation(concept: &str) -> Self {
        Self {
            kind: PromptKind::ConceptExplanation,
            system_prompt: CONCEPT_EXPLANATION_SYSTEM_PROMPT.to_string(),
            user_prompt: format!("Explain: {}", concept),
            max_tokens: 200,
            temperature: 0.7,
        }
    }
}
