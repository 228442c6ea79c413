//! Inbound idea generation request.
//!
//! One JSON schema is accepted, camelCase, with aliases for the older field
//! names (`templateKey`/`templateId`, `n`, `language`, ...). Unknown fields
//! are ignored. `count`, `tone` and `lang` never fail to parse: invalid
//! values fall back to their defaults. Only structurally broken bodies and
//! text fields of the wrong JSON type are rejected.

use std::num::NonZeroUsize;

use ideas_core::error::{IdeaError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::style::{Language, Tone};

/// Number of ideas to generate. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdeaCount(NonZeroUsize);

impl IdeaCount {
    /// Used when the caller sends no usable count.
    pub const DEFAULT: IdeaCount = IdeaCount(NonZeroUsize::new(5).unwrap());
    /// Upper bound applied unless the deployment configures another one.
    pub const MAX: IdeaCount = IdeaCount(NonZeroUsize::new(20).unwrap());

    /// `None` for zero.
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Cap the count at `max`.
    pub fn clamp_to(self, max: IdeaCount) -> Self {
        Self(self.0.min(max.0))
    }

    /// Interpret an arbitrary JSON value as a count. Positive integers,
    /// integral floats and numeric strings are accepted; everything else
    /// yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let count = match value {
            Value::Number(number) => count_from_number(number)?,
            Value::String(text) => text
                .trim()
                .parse::<u64>()
                .ok()
                .map(|count| usize::try_from(count).unwrap_or(usize::MAX))?,
            _ => return None,
        };

        Self::new(count)
    }
}

fn count_from_number(number: &Number) -> Option<usize> {
    if let Some(count) = number.as_u64() {
        return Some(usize::try_from(count).unwrap_or(usize::MAX));
    }

    // Negative integers and fractional values are not counts.
    let float = number.as_f64()?;
    (float.is_finite() && float >= 1.0 && float.fract() == 0.0).then_some(float as usize)
}

impl Default for IdeaCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for IdeaCount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(deserializer)?
            .as_ref()
            .and_then(IdeaCount::from_json)
            .unwrap_or_default())
    }
}

/// A request for `count` ideas following a content template.
///
/// `context` is the only field that must be present (and non-blank) before
/// the request may be served; see [`IdeaRequest::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdeaRequest {
    /// Template key, looked up in the hint table.
    #[serde(alias = "templateKey", alias = "templateId")]
    pub template: String,
    /// Human readable template name shown to the model instead of the key.
    pub template_label: Option<String>,
    #[serde(alias = "n")]
    pub count: IdeaCount,
    /// Domain context anchoring the ideas to the requester's business.
    #[serde(alias = "brandContext", alias = "domainContext")]
    pub context: Option<String>,
    pub tone: Tone,
    #[serde(rename = "lang", alias = "language")]
    pub language: Language,
    pub audience: Option<String>,
    pub purpose: Option<String>,
}

impl IdeaRequest {
    pub fn new(template: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            context: Some(context.into()),
            ..Self::default()
        }
    }

    /// Parse an inbound JSON body. An empty body reads as `{}`.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|err| {
            IdeaError::InvalidInput(format!("request body is not a valid idea request: {err}"))
        })
    }

    /// Zero falls back to [`IdeaCount::DEFAULT`].
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = IdeaCount::new(count).unwrap_or_default();
        self
    }

    pub fn with_template_label(mut self, label: impl Into<String>) -> Self {
        self.template_label = Some(label.into());
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Trimmed domain context, `None` when absent or blank.
    pub fn domain_context(&self) -> Option<&str> {
        non_blank(self.context.as_deref())
    }

    /// Name of the template as shown to the model: the label when one is
    /// given, the key otherwise.
    pub fn label(&self) -> &str {
        non_blank(self.template_label.as_deref()).unwrap_or(self.template.trim())
    }

    /// Check the preconditions for serving the request and cap `count` at
    /// `max_count`.
    ///
    /// # Errors
    ///
    /// * [`IdeaError::InvalidInput`] – `context` is missing or blank.
    pub fn validate(mut self, max_count: IdeaCount) -> Result<Self> {
        if self.domain_context().is_none() {
            return Err(IdeaError::InvalidInput(
                "`context` is required and must not be empty".into(),
            ));
        }

        self.count = self.count.clamp_to(max_count);
        Ok(self)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> IdeaRequest {
        IdeaRequest::from_json(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn parses_full_request() {
        let request = parse(json!({
            "template": "Fakta fredag",
            "templateLabel": "Fakta-fredag",
            "count": 3,
            "context": "Restaurantkjede i Oslo",
            "tone": "witty",
            "lang": "en",
            "audience": "kjøkkensjefer",
            "purpose": "internt nyhetsbrev",
            "somethingElse": true
        }));

        assert_eq!(request.template, "Fakta fredag");
        assert_eq!(request.label(), "Fakta-fredag");
        assert_eq!(request.count.get(), 3);
        assert_eq!(request.domain_context(), Some("Restaurantkjede i Oslo"));
        assert_eq!(request.tone, Tone::Witty);
        assert_eq!(request.language, Language::English);
        assert_eq!(request.audience.as_deref(), Some("kjøkkensjefer"));
        assert_eq!(request.purpose.as_deref(), Some("internt nyhetsbrev"));
    }

    #[test]
    fn accepts_alternate_field_names() {
        let request = parse(json!({
            "templateId": "Behind the scenes",
            "n": 7,
            "brandContext": "Hotell",
            "language": "en-GB"
        }));

        assert_eq!(request.template, "Behind the scenes");
        assert_eq!(request.count.get(), 7);
        assert_eq!(request.domain_context(), Some("Hotell"));
        assert_eq!(request.language, Language::English);
    }

    #[test]
    fn defaults_when_fields_are_missing() {
        let request = parse(json!({}));

        assert_eq!(request, IdeaRequest::default());
        assert_eq!(request.count, IdeaCount::DEFAULT);
        assert_eq!(request.tone, Tone::Neutral);
        assert_eq!(request.language, Language::Norwegian);
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        assert_eq!(IdeaRequest::from_json(b"").unwrap(), IdeaRequest::default());
        assert_eq!(
            IdeaRequest::from_json(b" \n").unwrap(),
            IdeaRequest::default()
        );
    }

    #[test]
    fn malformed_body_is_input_error() {
        let err = IdeaRequest::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, IdeaError::InvalidInput(_)));

        let err = IdeaRequest::from_json(br#"{"context": 42}"#).unwrap_err();
        assert!(matches!(err, IdeaError::InvalidInput(_)));
    }

    #[test]
    fn invalid_counts_fall_back_to_default() {
        for count in [json!(0), json!(-3), json!(2.5), json!("many"), json!(null), json!([3])] {
            let request = parse(json!({ "count": count }));
            assert_eq!(request.count, IdeaCount::DEFAULT, "count {count}");
        }
    }

    #[test]
    fn numeric_counts_are_accepted() {
        assert_eq!(parse(json!({ "count": "4" })).count.get(), 4);
        assert_eq!(parse(json!({ "count": 6.0 })).count.get(), 6);
        assert_eq!(parse(json!({ "count": 1000 })).count.get(), 1000);
    }

    #[test]
    fn validate_requires_context() {
        let request = parse(json!({
            "template": "Dagens kaffeprat",
            "count": 3,
            "context": ""
        }));

        let err = request.validate(IdeaCount::MAX).unwrap_err();
        assert!(matches!(err, IdeaError::InvalidInput(_)));

        let blank = IdeaRequest::new("Dagens kaffeprat", " \t\n");
        assert!(blank.validate(IdeaCount::MAX).is_err());

        let missing = IdeaRequest::default();
        assert!(missing.validate(IdeaCount::MAX).is_err());
    }

    #[test]
    fn validate_caps_count() {
        let request = IdeaRequest::new("Fakta fredag", "Kafé").with_count(500);
        let request = request.validate(IdeaCount::MAX).unwrap();
        assert_eq!(request.count, IdeaCount::MAX);

        let request = IdeaRequest::new("Fakta fredag", "Kafé").with_count(3);
        let request = request.validate(IdeaCount::MAX).unwrap();
        assert_eq!(request.count.get(), 3);
    }

    #[test]
    fn label_falls_back_to_key() {
        let request = IdeaRequest::new("Fakta fredag", "Kafé").with_template_label("  ");
        assert_eq!(request.label(), "Fakta fredag");
    }

    #[test]
    fn zero_count_builder_uses_default() {
        let request = IdeaRequest::new("Fakta fredag", "Kafé").with_count(0);
        assert_eq!(request.count, IdeaCount::DEFAULT);
    }
}
