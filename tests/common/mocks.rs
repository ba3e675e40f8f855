use async_trait::async_trait;
use prompt_relay::{
    Error, Result,
    inference::{InferenceClient, TextGenerationRequest},
};
use std::sync::{Arc, Mutex};

type Reply = Box<dyn Fn() -> Result<String> + Send + Sync>;

/// Mock inference client that records every request it receives
pub struct MockInferenceClient {
    reply: Reply,
    pub requests: Arc<Mutex<Vec<TextGenerationRequest>>>,
}

impl MockInferenceClient {
    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with_reply(move || Ok(text.clone()))
    }

    pub fn failing_with(make_error: impl Fn() -> Error + Send + Sync + 'static) -> Self {
        Self::with_reply(move || Err(make_error()))
    }

    fn with_reply(reply: impl Fn() -> Result<String> + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<TextGenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, request: TextGenerationRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        (self.reply)()
    }
}
