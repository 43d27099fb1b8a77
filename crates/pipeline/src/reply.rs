//! Lenient access to JSON-mode model replies.
//!
//! A reply that is missing, unparseable or not a JSON object becomes an
//! empty object. Accessors return `None`/empty for absent or mistyped
//! fields so callers apply their own defaults; nothing here fails.

use atelier_core::quality::score_or_default;
use atelier_core::types::Score;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReply(Map<String, Value>);

impl ModelReply {
    /// Parse raw message content.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self(map),
            Ok(other) => {
                tracing::warn!(kind = json_kind(&other), "Model reply is not a JSON object");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model reply is not valid JSON");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A non-blank string field.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// A numeric field; numeric strings such as `"92"` are accepted.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A quality score, clamped into range or defaulted when absent.
    pub fn score(&self, key: &str) -> Score {
        score_or_default(self.number(key))
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// The non-blank strings of an array field. A bare string is treated
    /// as a one-element list.
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// A nested object field, empty when absent.
    pub fn object(&self, key: &str) -> ModelReply {
        match self.0.get(key) {
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    /// The object elements of an array field.
    pub fn objects(&self, key: &str) -> Vec<ModelReply> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_object().cloned().map(Self))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
