//! Request validation, the outbound call and error mapping.
//!
//! [`IdeaHandler`] sits between an HTTP runtime and the core: it receives
//! the raw method and body of an invocation and answers with a status code
//! and JSON body. Checks run cheapest first and short-circuit:
//!
//! 1. method must be `POST` (405),
//! 2. a backend must be configured (500),
//! 3. the body must parse and carry a non-blank `context` (400).
//!
//! Only then is the prompt built and sent. A failing call answers 502 with
//! the upstream status when one is known; a reply in the wrong shape is
//! not an error and is handled by [`normalize`].

use ideas_core::{
    IdeasClient,
    error::{IdeaError, Result},
    generic::GenericMessage,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    schema_util::json_schema_response_format,
    template::IntoPrompt,
};
use ideas_types::{
    fragments::build_prompt,
    outputs::{IdeaList, IdeasPayload, normalize},
    request::IdeaRequest,
};
use serde_json::json;

use crate::config::HandlerConfig;

/// Content type of every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Status code and serialized JSON body handed back to the HTTP runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: String,
}

impl HandlerResponse {
    fn ideas(list: &IdeaList) -> Self {
        Self {
            status: 200,
            body: json!({ "ideas": list.as_slice() }).to_string(),
        }
    }

    fn error(err: &IdeaError) -> Self {
        Self {
            status: err.status(),
            body: json!({
                "error": {
                    "code": err.code(),
                    "message": err.to_string(),
                }
            })
            .to_string(),
        }
    }

    pub fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Serves idea generation requests against one backend.
///
/// Holds no per-request state; share one instance across tasks.
pub struct IdeaHandler<B> {
    backend: std::result::Result<IdeasClient<B>, String>,
    config: HandlerConfig,
}

impl<B> IdeaHandler<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B, config: HandlerConfig) -> Self {
        Self {
            backend: Ok(IdeasClient::new(backend)),
            config,
        }
    }

    /// Keep the outcome of building the backend. A failed build is reported
    /// as a configuration error on every request instead of at start-up.
    pub fn from_backend(backend: Result<B>, config: HandlerConfig) -> Self {
        let backend = match backend {
            Ok(backend) => Ok(IdeasClient::new(backend)),
            Err(IdeaError::Configuration(message)) => Err(message),
            Err(err) => Err(err.to_string()),
        };

        Self { backend, config }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Serve one invocation. Never fails: errors become error responses.
    pub async fn handle(&self, method: &str, body: &[u8]) -> HandlerResponse {
        match self.generate(method, body).await {
            Ok(ideas) => HandlerResponse::ideas(&ideas),
            Err(err) => {
                tracing::warn!(
                    code = err.code(),
                    status = err.status(),
                    error = %err,
                    "idea request failed"
                );
                HandlerResponse::error(&err)
            }
        }
    }

    /// Validate the invocation and generate ideas for it.
    ///
    /// # Errors
    ///
    /// * [`IdeaError::MethodNotAllowed`] – `method` is not `POST`.
    /// * [`IdeaError::Configuration`] – no backend is configured.
    /// * [`IdeaError::InvalidInput`] – the body does not parse or lacks a
    ///   context.
    /// * [`IdeaError::Upstream`] / [`IdeaError::Backend`] – the call failed.
    pub async fn generate(&self, method: &str, body: &[u8]) -> Result<IdeaList> {
        if !method.trim().eq_ignore_ascii_case("POST") {
            return Err(IdeaError::MethodNotAllowed {
                method: method.to_owned(),
            });
        }

        let client = self
            .backend
            .as_ref()
            .map_err(|message| IdeaError::Configuration(message.clone()))?;

        let request = IdeaRequest::from_json(body)?.validate(self.config.max_count)?;

        self.ideas_for(client, &request).await
    }

    async fn ideas_for(&self, client: &IdeasClient<B>, request: &IdeaRequest) -> Result<IdeaList> {
        tracing::debug!(
            template = %request.template,
            count = request.count.get(),
            tone = ?request.tone,
            language = ?request.language,
            "generating ideas"
        );

        let messages: Vec<GenericMessage> = build_prompt(request).into_prompt();
        let mut params = ChatCompleteParameters::new(messages, self.config.model.clone())
            .with_temperature(self.config.temperature);

        if self.config.structured_output {
            let format = json_schema_response_format::<IdeasPayload>("ideas").map_err(|err| {
                IdeaError::Configuration(format!("deriving response schema: {err}"))
            })?;
            params = params.with_response_format(format);
        }

        let response = client.chat_complete(params).await?;

        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "token usage"
            );
        }

        let ideas = normalize(response.content.text(), request.count);
        tracing::debug!(
            ideas = ideas.len(),
            source = ?ideas.source(),
            "normalized reply"
        );

        Ok(ideas)
    }
}

#[cfg(feature = "openai")]
impl IdeaHandler<ideas_openai::OpenAiAdapter> {
    /// Handler backed by OpenAI, configured entirely from the environment
    /// (`OPENAI_API_KEY`, `OPENAI_BASE_URL`, `IDEAS_*`).
    pub fn openai_from_env() -> Self {
        Self::from_backend(
            ideas_openai::OpenAiAdapterBuilder::new_from_env().build(),
            HandlerConfig::from_env(),
        )
    }
}
