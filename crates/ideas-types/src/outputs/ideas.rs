//! Reply normalization.
//!
//! The model is asked for `{"ideas": [...]}` but cannot be held to it, so a
//! reply runs through a two-stage chain:
//!
//! 1. **structured** – the whole reply (optionally inside one markdown code
//!    fence) parses as an [`IdeasPayload`] or a bare JSON array of strings;
//! 2. **lines** – otherwise every line is a candidate, with one leading
//!    bullet/numbering marker removed.
//!
//! The second stage is total. Structured entries are only trimmed, so an
//! idea such as `17. mai-frokost` survives intact. Emptied entries are
//! dropped and the first `count` are kept in their original order. If
//! nothing survives the list holds the single [`PLACEHOLDER_IDEA`].

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::request::IdeaCount;

/// Returned as the only idea when a reply yields nothing usable.
pub const PLACEHOLDER_IDEA: &str = "Kunne ikke hente forslag. Prøv igjen, eller juster prompten.";

/// `-`, `*`, `•` or digits followed by `.` or `)`, with the whitespace
/// around it. Matches once; a second marker is part of the idea.
static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s*").expect("marker pattern compiles"));

/// Structured reply shape requested from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct IdeasPayload {
    /// One short idea title per entry.
    pub ideas: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StructuredReply {
    Payload(IdeasPayload),
    Bare(Vec<String>),
}

/// Which stage of the chain produced an [`IdeaList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdeaSource {
    Structured,
    Lines,
    #[default]
    Placeholder,
}

/// Ordered, bounded, never-empty list of ideas.
///
/// Serializes as `{"ideas": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaList {
    ideas: Vec<String>,
    #[serde(skip)]
    source: IdeaSource,
}

impl IdeaList {
    fn placeholder() -> Self {
        Self {
            ideas: vec![PLACEHOLDER_IDEA.to_owned()],
            source: IdeaSource::Placeholder,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ideas
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    /// Always `false`; present for API symmetry with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn source(&self) -> IdeaSource {
        self.source
    }

    /// `true` when the reply yielded nothing and the placeholder was used.
    pub fn is_placeholder(&self) -> bool {
        self.source == IdeaSource::Placeholder
    }
}

impl IntoIterator for IdeaList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ideas.into_iter()
    }
}

/// Turn a raw model reply into at most `count` ideas. Never fails.
pub fn normalize(raw: &str, count: IdeaCount) -> IdeaList {
    let (ideas, source) = match parse_structured(raw) {
        Some(entries) => (
            first_non_empty(entries.iter().map(|entry| entry.trim()), count),
            IdeaSource::Structured,
        ),
        None => (
            first_non_empty(raw.lines().map(strip_marker), count),
            IdeaSource::Lines,
        ),
    };

    if ideas.is_empty() {
        return IdeaList::placeholder();
    }

    IdeaList { ideas, source }
}

fn first_non_empty<'a>(
    candidates: impl Iterator<Item = &'a str>,
    count: IdeaCount,
) -> Vec<String> {
    candidates
        .filter(|idea| !idea.is_empty())
        .take(count.get())
        .map(str::to_owned)
        .collect()
}

fn parse_structured(raw: &str) -> Option<Vec<String>> {
    match serde_json::from_str(unfence(raw.trim())).ok()? {
        StructuredReply::Payload(payload) => Some(payload.ideas),
        StructuredReply::Bare(ideas) => Some(ideas),
    }
}

/// Body of a reply wrapped in a single ```` ``` ```` fence, or the input.
fn unfence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some((_info, body)) = rest.split_once('\n') else {
        return text;
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn strip_marker(candidate: &str) -> &str {
    let rest = match LEADING_MARKER.find(candidate) {
        Some(marker) => &candidate[marker.end()..],
        None => candidate,
    };
    rest.trim()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn count(n: usize) -> IdeaCount {
        IdeaCount::new(n).unwrap()
    }

    #[test]
    fn mixed_markers_fall_back_to_lines() {
        let list = normalize("1. Idea A\n- Idea B\n* Idea C\nIdea D\n\n", count(5));

        assert_eq!(list.as_slice(), ["Idea A", "Idea B", "Idea C", "Idea D"]);
        assert_eq!(list.source(), IdeaSource::Lines);
    }

    #[test]
    fn structured_reply_is_truncated_in_order() {
        let list = normalize(r#"{"ideas":["X","Y","Z","Extra"]}"#, count(3));

        assert_eq!(list.as_slice(), ["X", "Y", "Z"]);
        assert_eq!(list.source(), IdeaSource::Structured);
    }

    #[test]
    fn empty_reply_yields_placeholder() {
        let list = normalize("", count(5));

        assert_eq!(list.as_slice(), [PLACEHOLDER_IDEA]);
        assert!(list.is_placeholder());
        assert!(!list.is_empty());
    }

    #[test]
    fn whitespace_and_bare_markers_yield_placeholder() {
        let list = normalize("\n  \n-\n2.\n•  \n", count(3));
        assert!(list.is_placeholder());
    }

    #[test]
    fn empty_structured_list_yields_placeholder() {
        let list = normalize(r#"{"ideas": []}"#, count(3));
        assert!(list.is_placeholder());
    }

    #[test]
    fn structured_entries_are_only_trimmed() {
        let list = normalize(r#"{"ideas": [" First ", "  ", "Second"]}"#, count(5));
        assert_eq!(list.as_slice(), ["First", "Second"]);
    }

    #[test]
    fn structured_entries_keep_leading_dates() {
        let raw = r#"{"ideas": ["17. mai-frokost for teamet", "1. april-spøk i kjøkkenet"]}"#;
        let list = normalize(raw, count(5));

        assert_eq!(
            list.as_slice(),
            ["17. mai-frokost for teamet", "1. april-spøk i kjøkkenet"]
        );
    }

    #[test]
    fn only_first_marker_is_stripped_from_lines() {
        let list = normalize("1. 17. mai-frokost for teamet\n2. 24) timers-vakt", count(5));

        assert_eq!(list.as_slice(), ["17. mai-frokost for teamet", "24) timers-vakt"]);
        assert_eq!(list.source(), IdeaSource::Lines);
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let raw = "```json\n{\"ideas\": [\"Alpha\", \"Beta\"]}\n```";
        let list = normalize(raw, count(5));

        assert_eq!(list.as_slice(), ["Alpha", "Beta"]);
        assert_eq!(list.source(), IdeaSource::Structured);
    }

    #[test]
    fn bare_array_is_structured() {
        let list = normalize(r#"["Alpha", "Beta", "Gamma"]"#, count(2));
        assert_eq!(list.as_slice(), ["Alpha", "Beta"]);
    }

    #[test]
    fn non_string_entries_fall_back_to_lines() {
        let raw = "{\"ideas\": [1, 2]}\nEkte idé";
        let list = normalize(raw, count(5));

        assert_eq!(list.source(), IdeaSource::Lines);
        assert_eq!(list.as_slice(), ["{\"ideas\": [1, 2]}", "Ekte idé"]);
    }

    #[test]
    fn missing_field_falls_back_to_lines() {
        let list = normalize(r#"{"suggestions": ["A"]}"#, count(5));
        assert_eq!(list.source(), IdeaSource::Lines);
    }

    #[test]
    fn numbering_variants_are_stripped() {
        let raw = "10. Tiende\n3) Tredje\n  •\tPunkt\n- 1. Nøstet\n*Stjerne";
        let list = normalize(raw, count(10));

        assert_eq!(
            list.as_slice(),
            ["Tiende", "Tredje", "Punkt", "1. Nøstet", "Stjerne"]
        );
    }

    #[test]
    fn never_pads_short_results() {
        let list = normalize("Bare én", count(5));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn serializes_under_single_field() {
        let list = normalize("A\nB", count(5));
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"{"ideas":["A","B"]}"#
        );
    }

    fn candidates(raw: &str) -> Vec<&str> {
        raw.lines()
            .map(strip_marker)
            .filter(|idea| !idea.is_empty())
            .collect()
    }

    proptest! {
        #[test]
        fn bounded_and_clean(raw in "[ -~•\n]{0,200}", n in 1usize..25) {
            let list = normalize(&raw, count(n));

            prop_assert!(list.len() <= n);
            prop_assert!(!list.is_empty());
            for idea in list.as_slice() {
                prop_assert!(!idea.trim().is_empty());
                prop_assert_eq!(idea.trim(), idea.as_str());
            }
        }

        #[test]
        fn line_fallback_is_an_ordered_prefix(
            lines in prop::collection::vec("(- |\\* |• |[0-9]{1,2}[.)] )?[A-Za-z ]{0,12}", 0..30),
            n in 1usize..25,
        ) {
            let raw = lines.join("\n");
            prop_assume!(parse_structured(&raw).is_none());

            let expected = candidates(&raw);
            let list = normalize(&raw, count(n));

            if expected.is_empty() {
                prop_assert!(list.is_placeholder());
            } else {
                prop_assert_eq!(list.len(), expected.len().min(n));
                prop_assert_eq!(list.as_slice(), &expected[..list.len()]);
            }
        }

        #[test]
        fn structured_takes_exactly_n_when_available(
            ideas in prop::collection::vec("[A-Za-z][A-Za-z ]{0,15}", 1..40),
            n in 1usize..25,
        ) {
            let raw = serde_json::to_string(&IdeasPayload { ideas: ideas.clone() }).unwrap();
            let list = normalize(&raw, count(n));

            let expected: Vec<&str> = ideas.iter().map(|idea| idea.trim()).take(n).collect();
            prop_assert_eq!(list.as_slice(), &expected[..]);
        }
    }
}
