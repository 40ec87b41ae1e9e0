//! Field and response types shared by every stage of the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display primitive held by a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No answer
    #[default]
    Null,
    /// Boolean answer
    Bool(bool),
    /// Numeric answer
    Number(f64),
    /// Text answer (objects and arrays arrive here stringified)
    Text(String),
}

impl FieldValue {
    /// Create a text value.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Whether the empty-filter treats this value as missing.
    ///
    /// Only `Null` and the empty string count; `0`, `false` and whitespace
    /// are real answers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Render the value as the string shown to the user and copied to the
    /// clipboard.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// One labeled answer within a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Identifier, unique within its response
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Answer value
    pub value: FieldValue,
    /// Optional grouping category
    #[serde(default)]
    pub category: Option<String>,
}

impl Field {
    /// Create a new uncategorized field.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
            category: None,
        }
    }

    /// Set category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Display string of the value.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.value.display()
    }
}

/// A single fetched record in canonical form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    /// Record identifier (empty when the source had none)
    pub id: String,
    /// Creation timestamp, if present and parseable
    pub created_at: Option<DateTime<Utc>>,
    /// Fields in source order
    pub fields: Vec<Field>,
}

impl Response {
    /// The response used for any input that cannot be read.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the response has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}
