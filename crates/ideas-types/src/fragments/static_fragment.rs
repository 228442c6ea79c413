//! A minimal fragment that injects a fixed string into the prompt.
//!
//! ```rust
//! use ideas_types::fragments::StaticFragment;
//! use ideas_core::generic::GenericRole;
//!
//! let sys_msg = StaticFragment::new(
//!     "You suggest content ideas.",
//!     GenericRole::System,
//! );
//! ```

use ideas_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with an LLM chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.0.0.to_string(), self.0.1)]
    }
}
