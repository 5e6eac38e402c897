use serde_json::Value;

use crate::ai::{
    error::AiError,
    network::{ApiClient, ApiConfig, DefaultApiClient},
};
use crate::constants::MODELS_ENDPOINT;

/// Lists the model identifiers available on the Anura endpoint
///
/// # Arguments
/// * `config` - API configuration carrying the base URL, bearer token and
///   proxy settings
///
/// # Returns
/// * `Vec<String>` - The advertised model identifiers, in server order.
///   An answer without a `data.models` array is an empty list, not an error;
///   callers decide whether an empty list is acceptable.
/// * `AiError` - Request failure, non-success status, or a malformed body
pub async fn list_models(config: &ApiConfig) -> Result<Vec<String>, AiError> {
    let client = DefaultApiClient::new();
    let response = client
        .get_request(config, MODELS_ENDPOINT)
        .await
        .map_err(AiError::RequestFailed)?;

    if response.is_error {
        return Err(AiError::ApiRequestFailed {
            status: response.status,
            details: response.content,
        });
    }

    #[cfg(debug_assertions)]
    log::debug!("list_models response: {}", &response.content);

    parse_models_body(&response.content)
}

/// Extracts the `data.models` array from the models response body.
///
/// A body that is not JSON at all is a parse failure; a well-formed body
/// where the path is absent or not an array yields an empty list.
fn parse_models_body(content: &str) -> Result<Vec<String>, AiError> {
    let json: Value = serde_json::from_str(content).map_err(|e| AiError::ResponseParseFailed {
        details: e.to_string(),
    })?;

    let models = json
        .pointer("/data/models")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(models)
}
