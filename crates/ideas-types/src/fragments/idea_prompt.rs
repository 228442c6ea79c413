use ideas_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};
use ideas_prompt::{builder::PromptBuilder, chain::PromptChain};

use crate::{request::IdeaRequest, templates::template_hint};

use super::StaticFragment;

const ROLE_FRAMING: &str = "Du er en innholds-idéassistent for et SaaS-selskap i hospitality.";
const TASK: &str =
    "Oppgave: Lag en liste med kreative, tydelige og handlingsbare idé-titler, én linje hver.";
const AVOID_CLICHES: &str = "Unngå markedsføringsfloskler, emojier og hashtags. \
                             Gjør idéene konkrete og relevante.";

/// System instructions plus the ordered user messages of one request.
///
/// Built fresh for every request by [`build_prompt`] and consumed once when
/// converted into chat messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    pub system_instructions: String,
    pub user_messages: Vec<String>,
}

/// Render the prompt for `request`.
///
/// Pure and total: unknown templates use the generic hint, unknown tones
/// and languages were already resolved to their defaults while parsing, and
/// blank optional fields are left out instead of rendered empty. Identical
/// requests produce byte-identical bundles.
pub fn build_prompt(request: &IdeaRequest) -> PromptBundle {
    let count = request.count.get();

    let system_instructions = PromptBuilder::new()
        .add_line(ROLE_FRAMING)
        .add_line(TASK)
        .add_line(format_contract(count))
        .add_line(request.language.instruction())
        .add_line(request.tone.instruction())
        .finalize();

    let brief = PromptBuilder::new()
        .add_key_value_opt("Mal", Some(request.label()))
        .add_key_value("Antall forslag", count)
        .add_key_value("Retningslinje for malen", template_hint(&request.template))
        .add_key_value_opt("Kontekst", request.context.as_deref())
        .add_key_value_opt("Målgruppe", request.audience.as_deref())
        .add_key_value_opt("Formål", request.purpose.as_deref())
        .add_line(AVOID_CLICHES)
        .finalize();

    PromptBundle {
        system_instructions,
        user_messages: vec![brief],
    }
}

fn format_contract(count: usize) -> String {
    format!(
        "Format: Returner KUN gyldig JSON på formen {{\"ideas\": [\"...\"]}} med nøyaktig \
         {count} elementer, uten forklaring eller annen tekst. Om du ikke kan returnere JSON, \
         skriv én idé per linje uten nummerering."
    )
}

impl IntoPrompt for PromptBundle {
    type Message = GenericMessage;

    /// One system message followed by the user messages, in order.
    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::new(
                &self.system_instructions,
                GenericRole::System,
            ))
            .with_all(
                self.user_messages
                    .iter()
                    .map(|message| StaticFragment::new(message, GenericRole::User)),
            )
            .build()
    }
}
