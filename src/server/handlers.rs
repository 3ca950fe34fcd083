use super::types::{ApiError, PromptQuery, ReviewRequest, require_input};
use crate::ai::AiService;
use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<AiService>,
}

impl AppState {
    pub fn new(ai: AiService) -> Self {
        Self { ai: Arc::new(ai) }
    }
}

/// `GET /get-response?prompt=...`
///
/// A query string that fails to parse is treated the same as a missing
/// `prompt`.
pub async fn get_response(
    State(state): State<AppState>,
    query: Option<Query<PromptQuery>>,
) -> Result<String, ApiError> {
    let prompt = require_input(query.and_then(|Query(query)| query.prompt)).inspect_err(|e| {
        warn!("Rejected prompt request: {}", e);
    })?;

    info!("Received prompt request ({} bytes)", prompt.len());

    state.ai.generate_response(&prompt).await.map_err(|e| {
        error!("Failed to generate response: {}", e);
        ApiError::from(e)
    })
}

/// Reads `code` from a JSON body and returns the model's review of it.
pub async fn review_code(
    State(state): State<AppState>,
    body: Option<Json<ReviewRequest>>,
) -> Result<String, ApiError> {
    let code = require_input(body.and_then(|Json(body)| body.code)).inspect_err(|e| {
        warn!("Rejected code review request: {}", e);
    })?;

    info!("Received code review request ({} bytes)", code.len());

    state.ai.review_code(&code).await.map_err(|e| {
        error!("Failed to review code: {}", e);
        ApiError::from(e)
    })
}
