use async_trait::async_trait;
use serde_json::Value;

/// Prompt and schema submitted to the narrative model.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub response_schema: Value,
}

/// Boundary to the external narrative-generation service.
///
/// Implementations return the raw structured payload; parsing and validation stay with the
/// report requester so every backend shares one fallback policy.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}

/// Failures talking to, or decoding the output of, the narrative model.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative API credential is not configured")]
    MissingCredential,
    #[error("narrative request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("narrative API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("narrative API returned no text")]
    EmptyResponse,
    #[error("narrative payload is not a valid report: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("narrative report field `{field}` is missing or blank")]
    Invalid { field: &'static str },
}
