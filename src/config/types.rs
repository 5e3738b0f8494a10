use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub model: ModelSettings,
}

/// Transport-level settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub timeout_secs: u64,
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub name: String,
    pub max_output_tokens: u32,
}

// File configuration types
#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: FileLlmSettings,
    #[serde(default)]
    pub model: FileModelSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileLlmSettings {
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileModelSettings {
    pub name: Option<String>,
    pub max_output_tokens: Option<u32>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub model: PersistedModel<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub api_key: &'a str,
    pub timeout_secs: u64,
    pub base_url: &'a str,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedModel<'a> {
    pub name: &'a str,
    pub max_output_tokens: u32,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                api_key: &config.llm.api_key,
                timeout_secs: config.llm.timeout_secs,
                base_url: &config.llm.base_url,
                user_agent: &config.llm.user_agent,
            },
            model: PersistedModel {
                name: &config.model.name,
                max_output_tokens: config.model.max_output_tokens,
            },
        }
    }
}
