use ideas_core::error::IdeaError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Upstream messages longer than this are cut before reaching the caller.
const MAX_UPSTREAM_MESSAGE: usize = 500;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t parse body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),

    #[error("API key is not a valid header value")]
    InvalidApiKey,
}

/// Error envelope OpenAI uses for non-success responses.
#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Human readable part of a non-success body: the envelope's `message` when
/// present, the raw body otherwise, truncated either way.
fn api_error_message(body: &str) -> String {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_owned());

    truncate(message)
}

fn truncate(mut message: String) -> String {
    if let Some((cut, _)) = message.char_indices().nth(MAX_UPSTREAM_MESSAGE) {
        message.truncate(cut);
        message.push('…');
    }
    message
}

impl From<OpenAiError> for IdeaError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) => IdeaError::Upstream {
                status: err.status().map(|status| status.as_u16()),
                message: if err.is_timeout() {
                    "request to OpenAI timed out".to_owned()
                } else {
                    truncate(err.without_url().to_string())
                },
            },
            OpenAiError::Serde(err) => IdeaError::Upstream {
                status: None,
                message: format!("malformed response from OpenAI: {err}"),
            },
            OpenAiError::Api { status, body } => IdeaError::Upstream {
                status: Some(status.as_u16()),
                message: api_error_message(&body),
            },
            OpenAiError::Format(message) => IdeaError::Upstream {
                status: None,
                message,
            },
            OpenAiError::InvalidApiKey => {
                IdeaError::Configuration("`OPENAI_API_KEY` is not a valid header value".into())
            }
        }
    }
}
