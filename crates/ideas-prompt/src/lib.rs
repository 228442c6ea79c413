//! Helpers for assembling prompt text ([`builder::PromptBuilder`]) and for
//! lining up message-producing fragments ([`chain::PromptChain`]).

pub mod builder;
pub mod chain;
