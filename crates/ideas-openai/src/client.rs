use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP client for OpenAI’s *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response), no retries.
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"[REDACTED]")
            .field("base", &self.base)
            .finish()
    }
}

impl OpenAiClient {
    /// Build on top of a configured `reqwest::Client`. `base_url` defaults
    /// to the public OpenAI endpoint.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self {
            api_key: api_key.into(),
            http,
            base,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| OpenAiError::InvalidApiKey)?,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let url = format!("{}/chat/completions", self.base);
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "OpenAI returned non-success status");

            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(choices = parsed.choices.len(), "chat completion received");

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::api_v1::{ChatCompletionMessage, MessageRole};

    fn client(server: &mockito::ServerGuard) -> OpenAiClient {
        OpenAiClient::with_http("sk-test", HttpClient::new(), Some(format!("{}/", server.url())))
    }

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            "gpt-4o-mini".into(),
            vec![ChatCompletionMessage {
                role: MessageRole::User,
                content: Some("Gi meg tre idéer".into()),
                name: None,
            }],
        )
        .temperature(0.8)
    }

    #[tokio::test]
    async fn posts_request_and_parses_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.8
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "created": 1,
                    "model": "gpt-4o-mini",
                    "choices": [{
                        "index": 0,
                        "message": { "role": "assistant", "content": "{\"ideas\":[\"A\"]}" },
                        "finish_reason": "stop"
                    }],
                    "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = client(&server).chat_completion(request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.choices.len(), 1);
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("{\"ideas\":[\"A\"]}")
        );
        assert_eq!(response.usage.map(|usage| usage.total_tokens), Some(15));
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("internal failure")
            .create_async()
            .await;

        let err = client(&server).chat_completion(request()).await.unwrap_err();

        match err {
            OpenAiError::Api { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "internal failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let err = client(&server).chat_completion(request()).await.unwrap_err();
        assert!(matches!(err, OpenAiError::Serde(_)));
    }

    #[tokio::test]
    async fn invalid_api_key_never_hits_the_network() {
        let client = OpenAiClient::with_http("sk-\ninvalid", HttpClient::new(), None);
        let err = client.chat_completion(request()).await.unwrap_err();
        assert!(matches!(err, OpenAiError::InvalidApiKey));
    }

    #[test]
    fn debug_output_redacts_key() {
        let client = OpenAiClient::with_http("sk-secret", HttpClient::new(), None);
        let debug = format!("{client:?}");

        assert!(!debug.contains("sk-secret"));
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
