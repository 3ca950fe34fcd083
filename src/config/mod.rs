mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from_path(&config_path).await
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    load_from_path_with(path, |key| env::var(key).ok()).await
}

/// Same as [`load_from_path`], reading overrides through `lookup` instead of
/// the process environment.
pub async fn load_from_path_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let mut config = from_yaml(&config_str)?;
    apply_env_overrides(&mut config, lookup);
    validate(&config)?;

    Ok(config)
}

pub fn from_yaml(source: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(source)?)
}

/// Overlays `LLM_API_KEY`, `LLM_BASE_URL` and `LLM_MODEL` onto the parsed file.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("LLM_API_KEY") {
        debug!("Using LLM api key from environment");
        config.llm.api_key = api_key;
    }
    if let Some(base_url) = lookup("LLM_BASE_URL") {
        debug!("Using LLM base url from environment: {}", base_url);
        config.llm.base_url = base_url;
    }
    if let Some(model) = lookup("LLM_MODEL") {
        debug!("Using LLM model from environment: {}", model);
        config.llm.model = model;
    }
}

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }
    Ok(())
}
