use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_REVIEW_PROMPT: &str = "You are an experienced code reviewer. \
Review the code you are given for correctness, readability, performance and security. \
Point out concrete problems, explain why they matter, and suggest improved code where it helps. \
Keep the review concise and well structured.";

/// Forwards prompts and code snippets to the configured LLM and hands back
/// the text of its reply.
pub struct AiService {
    llm_client: Arc<dyn LlmClient>,
    system_prompt: Option<String>,
    review_prompt: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl AiService {
    pub fn new(llm_client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            system_prompt: config.system_prompt.clone(),
            review_prompt: config
                .review_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_REVIEW_PROMPT.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        info!(
            "Initializing {} client for model {}",
            config.provider, config.model
        );
        Self::new(Arc::new(OpenAiClient::new(config.clone())), config)
    }

    pub async fn generate_response(&self, prompt: &str) -> Result<String> {
        debug!("Generating response for prompt of {} bytes", prompt.len());
        self.complete(self.system_prompt.as_deref(), prompt).await
    }

    pub async fn review_code(&self, code: &str) -> Result<String> {
        debug!("Reviewing code snippet of {} bytes", code.len());
        self.complete(Some(&self.review_prompt), code).await
    }

    async fn complete(&self, system_prompt: Option<&str>, input: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = system_prompt {
            messages.push(ChatMessage::system(system_prompt));
        }
        messages.push(ChatMessage::user(input));

        let request = ChatCompletionRequest {
            messages,
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        };

        let response = self.llm_client.create_chat_completion(request).await?;
        response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| Error::llm(format!("Completion {} returned no choices", response.id)))
    }
}
