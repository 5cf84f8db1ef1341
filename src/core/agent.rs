use async_trait::async_trait;
use rig::agent::Agent as RigAgent;
use rig::completion::Prompt;
use rig::providers::openai::{self, CompletionModel, GPT_35_TURBO};

use crate::catalog::SYSTEM_ROLE;
use crate::error::GenerationError;

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u64 = 300;

/// Source of generated post bodies. One call, one attempt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

pub struct Agent {
    agent: RigAgent<CompletionModel>,
}

impl Agent {
    pub fn new(openai_api_key: &str) -> Self {
        let client = openai::Client::new(openai_api_key);

        let agent = client
            .agent(GPT_35_TURBO)
            .preamble(SYSTEM_ROLE)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build();
        Agent { agent }
    }
}

#[async_trait]
impl TextGenerator for Agent {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self.agent.prompt(prompt).await?;
        let response = response.trim();
        if response.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(response.to_string())
    }
}
