//! OpenAI backend: a small *chat/completions* HTTP client plus the adapter
//! that implements [`ideas_core::provider::ChatCompletionProvider`] on top of
//! it.

mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub mod api_v1;
mod client;
pub mod error;
