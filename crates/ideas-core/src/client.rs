//! Generic, lightweight client bound to a single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the messages handed in can be converted into what the
//! backend expects, without dynamic dispatch in user code.
//!
//! Any backend crate (e.g. `ideas-openai`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box.
use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`, so one client can be
/// shared by every concurrently running request.
#[derive(Debug)]
pub struct IdeasClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for IdeasClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> IdeasClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for IdeasClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}
