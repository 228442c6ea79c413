use std::{env, sync::Arc, time::Duration};

use ideas_core::error::{IdeaError, Result};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`ideas_core::provider::ChatCompletionProvider`].
///
/// It stores the API key and base URL and owns a shareable,
/// connection-pooled `reqwest::Client`. All user-facing functionality sits
/// on the generic [`ideas_core::IdeasClient`] once the adapter is plugged in.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use ideas_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that reads `OPENAI_API_KEY` and, when set,
    /// `OPENAI_BASE_URL` from the environment.
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send requests to an OpenAI-compatible endpoint other than
    /// `https://api.openai.com/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`IdeaError::Configuration`] – if the API key is missing or blank,
    ///   or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                IdeaError::Configuration("missing env variable: `OPENAI_API_KEY`".into())
            })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|err| IdeaError::Configuration(format!("building HTTP client: {err}")))?;

        let base_url = self.base_url.filter(|url| !url.trim().is_empty());

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(api_key, http, base_url)),
        })
    }
}
