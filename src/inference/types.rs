use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the outbound text-generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default)]
    pub return_full_text: bool,
}

impl TextGenerationRequest {
    pub fn new(inputs: impl Into<String>, parameters: GenerationParameters) -> Self {
        Self {
            inputs: inputs.into(),
            parameters,
        }
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            return_full_text: false,
        }
    }
}

fn default_max_new_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.95
}

/// Pulls the generated text out of an upstream success body.
///
/// Accepts either `[{"generated_text": ...}, ...]` (first element only) or
/// `{"generated_text": ...}`. An empty or non-string value counts as absent.
/// The returned text is trimmed.
pub fn extract_generated_text(body: &Value) -> Option<String> {
    let generated = match body {
        Value::Array(items) => items.first()?.get("generated_text"),
        other => other.get("generated_text"),
    };

    generated
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(|text| text.trim().to_string())
}
