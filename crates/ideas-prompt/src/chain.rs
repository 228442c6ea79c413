//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](ideas_core::template::IntoPrompt).
//!
//! ```text
//! ┌────────────────┐    IntoPrompt     ┌────────────────┐
//! │ system fragment│ ─────────────────►│ Vec<Message>   │
//! ├────────────────┤                   ├────────────────┤
//! │ user fragment  │ ─────────────────►│ Vec<Message>   │
//! └────────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! `PromptChain` lines up fragments in a clear, linear fashion **without**
//! mutable vectors or verbose `extend()` calls. The generic parameter
//! `Message` lets back-ends plug in their own message types while reusing
//! the same chaining logic.
use ideas_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`], ensuring the builder API remains fluent.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// ```rust
    /// # use ideas_prompt::chain::PromptChain;
    /// # use ideas_core::generic::{GenericMessage, GenericRole};
    /// #
    /// # let msg = GenericMessage::new("hi".into(), GenericRole::User);
    /// let vec = PromptChain::new()
    ///     .with(msg)
    ///     .build();
    /// assert_eq!(vec.len(), 1);
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Append every item of `items` in iteration order.
    pub fn with_all<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPrompt<Message = Message>,
    {
        items.into_iter().fold(self, |chain, item| chain.with(item))
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
