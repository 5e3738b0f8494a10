use anyhow::{Result, anyhow};

use super::types::Config;

/// A missing API key is not a validation failure: the interactive form can
/// collect one per submission.
pub fn validate(config: &Config) -> Result<()> {
    if config.llm.base_url.trim().is_empty() {
        return Err(anyhow!("Gemini base URL cannot be empty"));
    }

    if config.llm.timeout_secs == 0 {
        return Err(anyhow!("Request timeout must be greater than zero seconds"));
    }

    if config.model.name.trim().is_empty() {
        return Err(anyhow!("Model name cannot be empty"));
    }

    Ok(())
}
