use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl PromptRequest {
    /// Parses a raw request body. Bodies that are not a JSON object yield an
    /// empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => Self {
                prompt: fields.remove("prompt").unwrap_or_default(),
            },
            _ => Self::default(),
        }
    }

    /// The prompt, if present and non-empty. `null`, `false`, `0` and other
    /// non-string values are treated as missing.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_str().filter(|prompt| !prompt.is_empty())
    }
}
