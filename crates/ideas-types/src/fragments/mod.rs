//! Prompt fragments.
//!
//! [`build_prompt`] renders an [`IdeaRequest`](crate::request::IdeaRequest)
//! into a [`PromptBundle`]; [`StaticFragment`] wraps a fixed string in a
//! chat role.

mod idea_prompt;
mod static_fragment;

pub use idea_prompt::{PromptBundle, build_prompt};
pub use static_fragment::StaticFragment;
