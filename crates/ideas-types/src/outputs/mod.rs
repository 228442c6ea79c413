//! Typed outputs: the structured reply shape and the normalized idea list.

mod ideas;

pub use ideas::{IdeaList, IdeaSource, IdeasPayload, PLACEHOLDER_IDEA, normalize};
