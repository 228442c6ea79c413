//! Domain types of the idea generation handler.
//!
//! * [`request`] – the inbound [`IdeaRequest`](request::IdeaRequest) and its
//!   bounded [`IdeaCount`](request::IdeaCount).
//! * [`style`] – closed tone and language enumerations.
//! * [`templates`] – the static template hint table.
//! * [`fragments`] – prompt construction ([`fragments::build_prompt`]).
//! * [`outputs`] – reply normalization ([`outputs::normalize`]).

pub mod fragments;
pub mod outputs;
pub mod request;
pub mod style;
pub mod templates;
