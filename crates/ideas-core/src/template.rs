//! Turning values into chat messages.
//!
//! Anything that can describe itself as an ordered list of chat messages
//! implements [`IntoPrompt`]. Prompt fragments, whole prompt bundles and a
//! single [`GenericMessage`](crate::generic::GenericMessage) all share this
//! one trait, so they can be chained freely before being handed to a
//! backend.
//!
//! ```rust
//! use ideas_core::template::IntoPrompt;
//! use ideas_core::generic::{GenericMessage, GenericRole};
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(HelloPrompt.into_prompt().len(), 1);
//! ```

/// Converts a value into a series of chat messages.
///
/// Provider crates typically use [`crate::generic::GenericMessage`], but a
/// back-end can require its own richer struct. By making the `Message` type
/// an **associated type** we keep the trait flexible without resorting to
/// dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::generic::GenericMessage`]
/// can be chained directly without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
