use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use crate::ai::chat::response::first_assistant_reply;
use crate::ai::{
    error::AiError,
    network::{ApiClient, ApiConfig, DefaultApiClient},
};
use crate::constants::{
    CHAT_COMPLETIONS_ENDPOINT, COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, SYSTEM_PROMPT,
};

/// Anura chat completion dispatcher
///
/// One instance per logical flow; overlapping invocations get independent
/// requests with no shared state.
#[derive(Clone, Default)]
pub struct AnuraChat {
    client: DefaultApiClient,
}

impl AnuraChat {
    /// Creates a new instance of AnuraChat
    pub fn new() -> Self {
        Self {
            client: DefaultApiClient::new(),
        }
    }

    /// Sends one question about a piece of code and returns the assistant's
    /// trimmed reply.
    ///
    /// The credential is validated before any network I/O. The request is
    /// raced against `cancel`; a triggered token aborts the in-flight call
    /// and no response parsing takes place.
    ///
    /// # Arguments
    /// * `config` - API configuration; `api_key` must hold the bearer token
    /// * `code` - The selected code the question refers to
    /// * `question` - The user's free-text question
    /// * `model` - Model identifier from the models endpoint
    /// * `cancel` - Cooperative cancellation signal
    pub async fn ask(
        &self,
        config: &ApiConfig,
        code: &str,
        question: &str,
        model: &str,
        cancel: CancellationToken,
    ) -> Result<String, AiError> {
        if config.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(AiError::MissingCredential);
        }

        // The endpoint answers in pseudo-stream form even with stream=false,
        // so the Accept header still announces an event stream.
        let config = config.with_headers(json!({"Accept": "text/event-stream"}));

        let body = json!({
            "model": model,
            "messages": build_messages(code, question),
            "max_tokens": COMPLETION_MAX_TOKENS,
            "temperature": COMPLETION_TEMPERATURE,
            "stream": false,
        });

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AiError::RequestCancelled),
            result = self.client.post_request(&config, CHAT_COMPLETIONS_ENDPOINT, body) => {
                result.map_err(AiError::RequestFailed)?
            }
        };

        // Status check comes before any line scanning.
        if response.is_error {
            return Err(AiError::ApiRequestFailed {
                status: response.status,
                details: response.content,
            });
        }

        first_assistant_reply(&response.content).ok_or(AiError::EmptyResponse)
    }
}

/// Builds the fixed two-message conversation for one question.
fn build_messages(code: &str, question: &str) -> Vec<Value> {
    vec![
        json!({ "role": "system", "content": SYSTEM_PROMPT }),
        json!({
            "role": "user",
            "content": format!("Code:\n```\n{}\n```\nQuestion: {}", code, question),
        }),
    ]
}
