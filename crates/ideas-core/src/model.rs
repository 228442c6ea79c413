//! Model identifiers used throughout the workspace.
//!
//! The enum keeps the public API simple while allowing each provider crate
//! to map the variants onto its own naming scheme. Deployments that need a
//! model without a dedicated variant use [`Model::Custom`].
//!
//! # Example
//!
//! ```rust
//! use ideas_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! assert_eq!(Model::from_name("gpt-4o-mini"), Model::DEFAULT);
//! ```
use std::borrow::Cow;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Any model name not covered by a dedicated enum variant, passed to the
    /// provider verbatim.
    Custom(Cow<'static, str>),
}

impl Model {
    /// Low-cost default used when the deployment does not pick a model.
    pub const DEFAULT: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);

    /// Resolve a configured model name. Known OpenAI names map onto their
    /// enum variant, anything else becomes [`Model::Custom`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        OpenAiModel::ALL
            .iter()
            .copied()
            .find(|model| model.name() == name)
            .map(Model::OpenAi)
            .unwrap_or_else(|| Model::Custom(Cow::Owned(name.to_owned())))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Models with a dedicated variant.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt5,
    Gpt5Nano,
    Gpt5Mini,
    Gpt4o,
    Gpt4oMini,
    Gpt41Mini,
}

impl OpenAiModel {
    pub const ALL: [OpenAiModel; 6] = [
        OpenAiModel::Gpt5,
        OpenAiModel::Gpt5Nano,
        OpenAiModel::Gpt5Mini,
        OpenAiModel::Gpt4o,
        OpenAiModel::Gpt4oMini,
        OpenAiModel::Gpt41Mini,
    ];

    /// Canonical wire name of the model.
    pub fn name(self) -> &'static str {
        match self {
            OpenAiModel::Gpt5 => "gpt-5",
            OpenAiModel::Gpt5Nano => "gpt-5-nano",
            OpenAiModel::Gpt5Mini => "gpt-5-mini",
            OpenAiModel::Gpt4o => "gpt-4o",
            OpenAiModel::Gpt4oMini => "gpt-4o-mini",
            OpenAiModel::Gpt41Mini => "gpt-4.1-mini",
        }
    }
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
