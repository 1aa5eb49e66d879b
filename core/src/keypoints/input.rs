use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw `actions_keypoints` value as returned by the impacts API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeypointsInput {
    Text(String),
    List(Vec<String>),
}

impl KeypointsInput {
    /// Lenient decoding from an arbitrary JSON value. Never fails; shapes
    /// that carry no points decode to `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(KeypointsInput::Text(s.clone())),
            Value::Array(items) => {
                let list = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                Some(KeypointsInput::List(list))
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            KeypointsInput::Text(s) => s.is_empty(),
            KeypointsInput::List(items) => items.is_empty(),
        }
    }

    /// Cleaned, display-ready points.
    pub fn points(&self) -> Vec<String> {
        super::parser::parse_action_keypoints(Some(self))
    }
}

impl From<&str> for KeypointsInput {
    fn from(s: &str) -> Self {
        KeypointsInput::Text(s.to_string())
    }
}

impl From<String> for KeypointsInput {
    fn from(s: String) -> Self {
        KeypointsInput::Text(s)
    }
}

impl From<Vec<String>> for KeypointsInput {
    fn from(items: Vec<String>) -> Self {
        KeypointsInput::List(items)
    }
}
