mod parsing;
mod prompt;
mod types;

pub use prompt::build_prompt;
pub use types::{SOFTWARE_TYPE_CHOICES, SoftwareType, TechStackRecommendation};

use serde_json::Value;

use crate::client::{GeminiClient, GenerateTextRequest};
use crate::config::Config;
use crate::errors::RecommendError;

use parsing::extract_json_object;

/// Issue one text-generation call and interpret the result as a
/// recommendation. No retries, no rate limiting; failure taxonomy per
/// `RecommendError`.
pub async fn fetch_recommendation(
    client: &GeminiClient,
    model: &str,
    max_output_tokens: u32,
    prompt: &str,
) -> Result<TechStackRecommendation, RecommendError> {
    let request = GenerateTextRequest::from_prompt(prompt, max_output_tokens);
    let completion = client
        .generate_text(model, request)
        .await
        .map_err(RecommendError::Fetch)?;

    let result = completion.result.trim();
    if result.is_empty() {
        return Err(RecommendError::EmptyResponse {
            status: completion.status_code,
        });
    }

    let fragment = extract_json_object(result).ok_or(RecommendError::MalformedResponse)?;
    let parsed: Value =
        serde_json::from_str(&fragment).map_err(|_| RecommendError::MalformedResponse)?;

    // Only top-level JSON-ness is validated; the per-section shape belongs
    // to the model.
    match parsed {
        Value::Object(sections) if !sections.is_empty() => Ok(sections),
        _ => Err(RecommendError::MalformedResponse),
    }
}

/// One full submission cycle: build the prompt, construct a client carrying
/// this submission's credential, call the service, parse. The credential
/// lives only in the client built here; nothing process-wide is mutated.
pub async fn submit(
    config: &Config,
    credential: &str,
    software_type: SoftwareType,
    description: &str,
    verbose: bool,
) -> Result<TechStackRecommendation, RecommendError> {
    let prompt = build_prompt(software_type, description);
    let client = GeminiClient::new(&config.llm, credential.to_string())
        .map_err(RecommendError::Fetch)?
        .verbose(verbose);

    fetch_recommendation(
        &client,
        &config.model.name,
        config.model.max_output_tokens,
        &prompt,
    )
    .await
}
