use rust_i18n::t;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("{}", t!("chat.error.missing_api_token"))]
    MissingCredential,

    #[error("{}", t!("chat.error.api_request_failed", status = .status, details = .details))]
    ApiRequestFailed { status: u16, details: String },

    #[error("{}", t!("chat.error.request_failed", details = .0))]
    RequestFailed(String),

    #[error("{}", t!("chat.error.request_cancelled"))]
    RequestCancelled,

    #[error("{}", t!("chat.error.response_parse_failed", details = .details))]
    ResponseParseFailed { details: String },

    #[error("{}", t!("chat.error.empty_response"))]
    EmptyResponse,
}
