use super::mocks::MockLlmClient;
use ai_relay::{
    ai::AiService,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server::{AppState, RouteKind, build_router},
};
use axum::Router;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            cors: true,
            routes: RouteKind::defaults(),
        },
        llm: LlmConfig {
            provider: "openai".to_string(),
            base_url: String::new(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            system_prompt: None,
            review_prompt: None,
            temperature: 0.7,
            max_tokens: None,
        },
    }
}

pub fn create_test_state(client: Arc<MockLlmClient>) -> AppState {
    let config = create_test_config();
    AppState::new(AiService::new(client, &config.llm))
}

/// Router with the given routes, backed by a mock that always answers `reply`.
pub fn create_test_app(reply: &str, routes: &[RouteKind]) -> (Router, Arc<MockLlmClient>) {
    let client = Arc::new(MockLlmClient::replying(reply));
    let app = build_router(create_test_state(client.clone()), routes);
    (app, client)
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: debug
  routes:
    - get_response
    - code_review
llm:
  base_url: "http://localhost:11434/v1"
  api_key: "sample-key"
  model: "llama3"
  system_prompt: "Answer in one paragraph."
"#;
