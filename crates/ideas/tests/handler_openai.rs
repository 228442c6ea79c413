//! End-to-end runs of the handler against a mocked OpenAI endpoint.

#![cfg(feature = "openai")]

use ideas::{
    HandlerConfig, IdeaHandler,
    openai::{OpenAiAdapter, OpenAiAdapterBuilder},
};
use mockito::{Matcher, ServerGuard};
use serde_json::{Value, json};

fn handler(server: &ServerGuard, config: HandlerConfig) -> IdeaHandler<OpenAiAdapter> {
    let backend = OpenAiAdapterBuilder::new()
        .with_api_key("sk-test")
        .with_base_url(server.url())
        .build();

    IdeaHandler::from_backend(backend, config)
}

fn completion(content: &str) -> String {
    json!({
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ],
        "usage": { "prompt_tokens": 120, "completion_tokens": 30, "total_tokens": 150 }
    })
    .to_string()
}

fn request_body() -> Vec<u8> {
    json!({
        "template": "Dagens kaffeprat",
        "count": 3,
        "context": "Kaffebar i Bergen",
        "tone": "witty"
    })
    .to_string()
    .into_bytes()
}

#[tokio::test]
async fn structured_reply_becomes_ideas() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.8
        })))
        .with_status(200)
        .with_body(completion(r#"{"ideas": ["Første", "Andre", "Tredje", "Fjerde"]}"#))
        .create_async()
        .await;

    let response = handler(&server, HandlerConfig::default())
        .handle("POST", &request_body())
        .await;

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type(), "application/json; charset=utf-8");

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body, json!({ "ideas": ["Første", "Andre", "Tredje"] }));
}

#[tokio::test]
async fn structured_output_sends_json_schema() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "ideas", "strict": true }
            }
        })))
        .with_status(200)
        .with_body(completion(r#"{"ideas": ["A", "B", "C"]}"#))
        .create_async()
        .await;

    let config = HandlerConfig::default().with_structured_output(true);
    let response = handler(&server, config)
        .handle("POST", &request_body())
        .await;

    mock.assert_async().await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error": {"message": "The server had an error"}}"#)
        .create_async()
        .await;

    let response = handler(&server, HandlerConfig::default())
        .handle("POST", &request_body())
        .await;

    assert_eq!(response.status, 502);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"]["code"], "upstream_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("500"));
    assert!(body.get("ideas").is_none());
}

#[tokio::test]
async fn invalid_request_never_reaches_upstream() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let handler = handler(&server, HandlerConfig::default());
    let body = json!({ "template": "Fakta fredag", "context": "   " }).to_string();

    assert_eq!(handler.handle("POST", body.as_bytes()).await.status, 400);
    assert_eq!(handler.handle("GET", &request_body()).await.status, 405);

    mock.assert_async().await;
}

#[tokio::test]
async fn missing_api_key_is_a_configuration_error() {
    let handler: IdeaHandler<OpenAiAdapter> = IdeaHandler::from_backend(
        OpenAiAdapterBuilder::new().build(),
        HandlerConfig::default(),
    );

    let response = handler.handle("POST", &request_body()).await;
    let body: Value = serde_json::from_str(&response.body).unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(body["error"]["code"], "configuration_error");
}
