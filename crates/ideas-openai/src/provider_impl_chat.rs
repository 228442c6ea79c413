use std::{future::Future, pin::Pin, sync::Arc};

use ideas_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            let response = client.chat_completion(request).await?;
            let usage = response.usage.map(Into::into);

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            // A cut-off or filtered reply still goes to the normalizer,
            // which keeps whatever complete lines it can find.
            note_finish_reason(first_choice.finish_reason.as_ref());

            Ok(GenericChatCompletionResponse {
                content: first_choice.message.into(),
                usage,
            })
        })
    }
}

#[cfg(feature = "tracing")]
fn note_finish_reason(reason: Option<&FinishReason>) {
    if !matches!(reason, None | Some(FinishReason::Stop)) {
        tracing::warn!(finish_reason = ?reason, "chat completion did not finish normally");
    }
}

#[cfg(not(feature = "tracing"))]
fn note_finish_reason(_reason: Option<&FinishReason>) {}
