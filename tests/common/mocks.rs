use ai_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient, Role},
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock LLM client for testing. Answers every request with the same reply
/// (or error) and records what it was asked.
#[derive(Debug)]
pub struct MockLlmClient {
    pub reply: String,
    pub error: Option<String>,
    pub requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockLlmClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            error: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            reply: String::new(),
            error: Some(error.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// User-message contents of every recorded request, in call order.
    pub fn user_inputs(&self) -> Vec<String> {
        self.get_requests()
            .into_iter()
            .filter_map(|request| {
                request
                    .messages
                    .into_iter()
                    .find(|message| message.role == Role::User)
                    .map(|message| message.content)
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        Ok(ChatCompletionResponse {
            id: "chatcmpl-mock".to_string(),
            choices: vec![Choice {
                message: ChatMessage::assistant(self.reply.clone()),
            }],
        })
    }
}
