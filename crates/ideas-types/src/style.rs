//! Closed tone and language enumerations.
//!
//! Both are parsed leniently: any label outside the known set, a `null`, or
//! a value of the wrong JSON type resolves to the default variant. Resolving
//! a prompt instruction from a variant is an exhaustive `match`, so adding a
//! variant without an instruction does not compile.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Writing tone requested for the generated ideas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Witty,
    Professional,
    Technical,
    Relatable,
}

impl Tone {
    /// Total parse: unknown labels map to [`Tone::Neutral`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "witty" => Tone::Witty,
            "professional" => Tone::Professional,
            "technical" => Tone::Technical,
            "relatable" => Tone::Relatable,
            _ => Tone::Neutral,
        }
    }

    /// Prompt line stating the tone to the model.
    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Neutral => "Bruk en nøytral, vennlig tone.",
            Tone::Witty => "Tone: vittig, lett og smart, men ikke klisjé.",
            Tone::Professional => "Tone: profesjonell og troverdig.",
            Tone::Technical => "Tone: teknisk og presis, men lettlest.",
            Tone::Relatable => "Tone: jordnær og relaterbar.",
        }
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(lenient_label(deserializer)?
            .map(|label| Tone::parse(&label))
            .unwrap_or_default())
    }
}

/// Output language of the generated ideas.
///
/// Norwegian (bokmål) is the primary language; only English is recognised
/// as an alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Norwegian,
    English,
}

impl Language {
    /// Total parse: `en` and region-tagged forms (`en-US`, `en_GB`) select
    /// English, everything else the primary language.
    pub fn parse(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();

        match primary {
            "en" => Language::English,
            _ => Language::Norwegian,
        }
    }

    /// Prompt line stating the output language to the model.
    pub fn instruction(self) -> &'static str {
        match self {
            Language::English => "Write in concise, natural English.",
            Language::Norwegian => "Skriv på norsk (bokmål).",
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(lenient_label(deserializer)?
            .map(|code| Language::parse(&code))
            .unwrap_or_default())
    }
}

/// Accept any JSON value and keep it only if it is a string.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(label)) => Some(label),
        _ => None,
    })
}
