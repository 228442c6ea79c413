//! Unified error type exposed by **`ideas-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the handler. Every variant maps to a stable
//! machine-readable [`IdeaError::code`] and an HTTP-style
//! [`IdeaError::status`], so the caller can tell a misconfigured deployment
//! apart from bad input or a failing upstream service.
//!
//! A reply that merely has the wrong *shape* is not an error at all: the
//! response normalizer absorbs it.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, IdeaError>;

#[derive(Debug, Error)]
pub enum IdeaError {
    /// The inbound invocation used a verb other than `POST`.
    #[error("method `{method}` not allowed, use POST")]
    MethodNotAllowed { method: String },

    /// A required secret is missing or the deployment points at a model the
    /// backend cannot serve. Needs operator intervention.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller sent a request that cannot be served as-is.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The text-generation service answered with a non-success status, the
    /// call itself failed, or the top-level response was unusable.
    #[error("{}", upstream_message(.status, .message))]
    Upstream { status: Option<u16>, message: String },

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("upstream error: {status} {message}"),
        None => format!("upstream error: {message}"),
    }
}

impl IdeaError {
    /// Stable identifier placed in error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            IdeaError::MethodNotAllowed { .. } => "method_not_allowed",
            IdeaError::Configuration(_) => "configuration_error",
            IdeaError::InvalidInput(_) => "input_error",
            IdeaError::Upstream { .. } | IdeaError::Backend(_) => "upstream_error",
        }
    }

    /// HTTP status the handler answers with.
    pub fn status(&self) -> u16 {
        match self {
            IdeaError::MethodNotAllowed { .. } => 405,
            IdeaError::Configuration(_) => 500,
            IdeaError::InvalidInput(_) => 400,
            IdeaError::Upstream { .. } | IdeaError::Backend(_) => 502,
        }
    }

    /// `true` for failures detected before any outbound call is attempted.
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            IdeaError::MethodNotAllowed { .. }
                | IdeaError::Configuration(_)
                | IdeaError::InvalidInput(_)
        )
    }
}
