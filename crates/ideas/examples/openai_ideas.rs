use ideas::{HandlerConfig, IdeaHandler, openai::OpenAiAdapterBuilder};
use tracing_subscriber::EnvFilter;

/// # Idea generation – end-to-end through the handler
///
/// Sends one request body through [`IdeaHandler::handle`] exactly as an HTTP
/// runtime would, then prints the status and JSON body it answers with.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…      # mandatory
/// export IDEAS_MODEL=gpt-4o-mini  # optional
/// RUST_LOG=ideas=debug cargo run -p ideas --example openai_ideas
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let handler = IdeaHandler::new(backend, HandlerConfig::from_env());

    let body = serde_json::json!({
        "template": "Dagens kaffeprat",
        "count": 5,
        "context": "Kaffebar i Bergen med fokus på lokale bønner",
        "tone": "witty",
        "lang": "no",
    });

    let response = handler
        .handle("POST", body.to_string().as_bytes())
        .await;

    println!("HTTP {} ({})", response.status, response.content_type());

    let parsed: serde_json::Value = serde_json::from_str(&response.body)?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);

    Ok(())
}
