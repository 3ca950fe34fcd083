mod service;

pub use service::{AiService, DEFAULT_REVIEW_PROMPT};
