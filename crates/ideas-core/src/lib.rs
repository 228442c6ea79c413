//! Provider-agnostic building blocks for the idea generation handler:
//! chat message types, the [`provider::ChatCompletionProvider`] trait every
//! backend implements, model identifiers and the [`error::IdeaError`]
//! taxonomy shared by all crates.

pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use client::IdeasClient;
