use thiserror::Error;

/// Failures the recommendation pipeline can surface to the user. Every
/// variant's display string is the exact one-line message shown on screen.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error(
        "Google Generative AI API key required. Pass --api-key, set GEMINI_API_KEY, or run 'stackgenius --setup'."
    )]
    MissingCredential,

    /// The service answered but the result text was empty.
    #[error("API request failed with status code: {status}")]
    EmptyResponse { status: u16 },

    /// The result text was present but did not contain a JSON object.
    #[error("Invalid response format from Generative AI API.")]
    MalformedResponse,

    /// Transport-level or otherwise unclassified failure.
    #[error("Error fetching recommendations. Please check your API key or try again later.")]
    Fetch(#[source] anyhow::Error),
}
