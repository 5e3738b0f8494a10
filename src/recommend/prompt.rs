use super::types::SoftwareType;

/// Example-output skeleton embedded in every prompt. It exists solely to
/// bias the model toward this JSON shape; the parser never assumes it.
pub(crate) const SAMPLE_OUTPUT: &str = r#"{
    "front-end_languages": {
        "languages": "suggested language or framework only one",
        "justification": "justification for selecting framework",
        "docs": "link of docs if available or null"
    },
    "back-end_languages": {
        "languages": "suggested language or framework only one",
        "justification": "justification for selecting framework",
        "docs": "link of docs if available or null"
    },
    "database": {
        "type": "database type",
        "specific_database": "suggested database",
        "justification": "justification for selecting database",
        "docs": "link of docs if available or null"
    },
    "deployment_platform": {
        "platform": "deployment platform",
        "justification": "justification for selecting following platform",
        "docs": "link of docs if available or null"
    }
}"#;

/// Pure and deterministic. The description is embedded as-is; sanitizing it
/// against prompt injection is out of scope.
pub fn build_prompt(software_type: SoftwareType, description: &str) -> String {
    format!(
        "Recommend a tech stack for a {software_type} with the following description: {description}. sample output :{SAMPLE_OUTPUT}"
    )
}
