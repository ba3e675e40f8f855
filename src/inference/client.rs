use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

const EMPTY_UPSTREAM_ERROR: &str = "API request failed";

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Runs one text-generation call and returns the trimmed generated text.
    async fn generate(&self, request: TextGenerationRequest) -> Result<String>;
}

/// Client for the Hugging Face hosted inference API.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_token: config.api_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, request: TextGenerationRequest) -> Result<String> {
        debug!(
            endpoint = %self.endpoint,
            prompt_chars = request.inputs.chars().count(),
            "Sending text generation request"
        );

        let mut http_request = self.client.post(&self.endpoint).json(&request);
        if let Some(ref token) = self.api_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if status == StatusCode::SERVICE_UNAVAILABLE {
                return Err(Error::ModelLoading);
            }

            warn!(
                status = status.as_u16(),
                "Inference request failed: {}", error_text
            );

            return Err(if error_text.is_empty() {
                Error::upstream(EMPTY_UPSTREAM_ERROR)
            } else {
                Error::upstream(error_text)
            });
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;

        let text = extract_generated_text(&body).ok_or(Error::UnexpectedFormat)?;

        debug!(
            generated_chars = text.chars().count(),
            "Received text generation response"
        );

        Ok(text)
    }
}
