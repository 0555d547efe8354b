use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Answers of a checkbox group: the ticked options plus the optional free "other" text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl Selection {
    pub fn of(options: &[&str]) -> Self {
        let mut selection = Self::default();
        for option in options {
            selection.select(option);
        }
        selection
    }

    /// Ticks an option. Already ticked options keep their position.
    pub fn select(&mut self, option: &str) {
        if !self.is_selected(option) {
            self.selected.push(option.to_string());
        }
    }

    pub fn deselect(&mut self, option: &str) {
        self.selected.retain(|o| o != option);
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|o| o == option)
    }

    /// Sets the free text. Blank text unticks the "other" entry.
    pub fn set_other(&mut self, text: &str) {
        let trimmed = text.trim();
        self.other = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn with_other(mut self, text: &str) -> Self {
        self.set_other(text);
        self
    }

    /// Number of answers, counting the free text as one.
    pub fn len(&self) -> usize {
        self.selected.len() + usize::from(self.other.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single answer. The shape is fixed by the field's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Selection(Selection),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    /// Whether the answer counts as not given.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&Selection> {
        match self {
            FieldValue::Selection(s) => Some(s),
            _ => None,
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Selection(_) => "selection",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            FieldValue::Selection(s) => {
                let mut parts: Vec<String> = s.selected.clone();
                if let Some(other) = &s.other {
                    parts.push(format!("Other: {}", other));
                }
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Selection> for FieldValue {
    fn from(value: Selection) -> Self {
        FieldValue::Selection(value)
    }
}

/// The flat record of answers collected by a session, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftRecord {
    values: BTreeMap<String, FieldValue>,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: &str, value: FieldValue) -> Option<FieldValue> {
        self.values.insert(field.to_string(), value)
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DraftRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
