//! # `ideas` – The umbrella crate
//!
//! Serves "give me N ideas for this template" requests: validates the
//! inbound body, renders a deterministic prompt, makes one chat completion
//! call and turns whatever text comes back into a clean list of ideas.
//!
//! | Crate               | What it provides                                                    |
//! |---------------------|---------------------------------------------------------------------|
//! | **`ideas-core`**    | Provider trait, generic messages, models, the error taxonomy        |
//! | **`ideas-prompt`**  | Line-oriented prompt builder and fragment chaining                  |
//! | **`ideas-types`**   | Request parsing, tone/language, template hints, prompt, normalizer  |
//! | **`ideas-openai`**  | HTTP client implementing the provider for OpenAI *(optional)*       |
//!
//! The handler itself ([`IdeaHandler`]) and its deployment settings
//! ([`HandlerConfig`]) live in this crate.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use ideas::IdeaHandler;
//!
//! #[tokio::main]
//! async fn main() {
//!     let handler = IdeaHandler::openai_from_env();
//!     let body = br#"{"template": "Fakta fredag", "count": 3, "context": "Hotell"}"#;
//!
//!     let response = handler.handle("POST", body).await;
//!     println!("{} {}", response.status, response.body);
//! }
//! ```
//!
//! Without the `openai` feature, plug any [`provider::ChatCompletionProvider`]
//! into [`IdeaHandler::new`].
#![doc(html_root_url = "https://docs.rs/ideas/latest")]

pub mod config;
pub mod handler;

pub use config::HandlerConfig;
pub use handler::{HandlerResponse, IdeaHandler, JSON_CONTENT_TYPE};

pub use ideas_core::*;
pub use ideas_prompt as prompt;
pub use ideas_types as types;

#[cfg(feature = "openai")]
pub use ideas_openai as openai;
