use super::types::{MessageResponse, PromptRequest};
use crate::{
    Error, Result,
    inference::{GenerationParameters, InferenceClient, TextGenerationRequest},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn InferenceClient>,
    pub parameters: GenerationParameters,
}

impl AppState {
    pub fn new(client: Arc<dyn InferenceClient>, parameters: GenerationParameters) -> Self {
        Self { client, parameters }
    }
}

/// Relays a prompt to the inference backend. Serves every path and method;
/// CORS headers are added by the router layers.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4(), method = %method))]
pub async fn relay(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    // Preflight
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match respond(&state, &method, &body).await {
        Ok(message) => {
            info!(message_chars = message.chars().count(), "Relayed prompt");
            (StatusCode::OK, Json(MessageResponse { message })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn respond(state: &AppState, method: &Method, body: &[u8]) -> Result<String> {
    if *method != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let request = PromptRequest::from_body(body);
    let prompt = request.prompt().ok_or(Error::PromptRequired)?;

    info!(prompt_chars = prompt.chars().count(), "Received prompt");

    state
        .client
        .generate(TextGenerationRequest::new(prompt, state.parameters.clone()))
        .await
}
