//! Deployment settings of the handler.
//!
//! Values come from [`HandlerConfig::default`], fluent `with_*` overrides or
//! the environment ([`HandlerConfig::from_env`]). Unparseable environment
//! values are ignored in favour of the defaults.

use std::env;

use ideas_core::model::Model;
use ideas_types::request::IdeaCount;

/// Sampling temperature favouring variety over determinism.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerConfig {
    /// Model every request is sent to.
    pub model: Model,
    /// Sampling temperature, within `0.0..=2.0`.
    pub temperature: f64,
    /// Upper bound applied to the requested idea count.
    pub max_count: IdeaCount,
    /// Attach a JSON schema `response_format` derived from the reply shape.
    pub structured_output: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            model: Model::DEFAULT,
            temperature: DEFAULT_TEMPERATURE,
            max_count: IdeaCount::MAX,
            structured_output: false,
        }
    }
}

impl HandlerConfig {
    /// Read `IDEAS_MODEL`, `IDEAS_TEMPERATURE`, `IDEAS_MAX_COUNT` and
    /// `IDEAS_STRUCTURED_OUTPUT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(model) = lookup("IDEAS_MODEL").filter(|model| !model.trim().is_empty()) {
            config = config.with_model(Model::from_name(&model));
        }
        if let Some(temperature) = lookup("IDEAS_TEMPERATURE").and_then(|v| v.trim().parse().ok()) {
            config = config.with_temperature(temperature);
        }
        if let Some(max_count) = lookup("IDEAS_MAX_COUNT").and_then(|v| v.trim().parse().ok()) {
            config = config.with_max_count(max_count);
        }
        if let Some(structured) = lookup("IDEAS_STRUCTURED_OUTPUT").and_then(|v| parse_flag(&v)) {
            config = config.with_structured_output(structured);
        }

        config
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    /// Values outside `0.0..=2.0` are ignored.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        if (0.0..=2.0).contains(&temperature) {
            self.temperature = temperature;
        }
        self
    }

    /// Zero is ignored.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        if let Some(max_count) = IdeaCount::new(max_count) {
            self.max_count = max_count;
        }
        self
    }

    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
