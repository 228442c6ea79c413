use std::borrow::Cow;

use ideas_core::model::Model;

/// Wire name of `model`, `None` for a blank custom name.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::OpenAi(openai_model) => Some(Cow::Borrowed(openai_model.name())),
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(custom.clone()),
    }
}
