//! Normalization of raw response records into canonical [`Response`] values.
//!
//! The upstream record arrives as `{ id, criado_em, dados: { campos: [...] } }`
//! from a host binding and is only partially trusted. Everything here is
//! total: malformed pieces degrade to defaults instead of failing.

use crate::field::{Field, FieldValue, Response};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

/// Property names tried, in order, when reading a single field entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldMapping {
    /// Candidate names for the field key
    pub key: Vec<String>,
    /// Candidate names for the label
    pub label: Vec<String>,
    /// Candidate names for the value
    pub value: Vec<String>,
    /// Candidate names for the category
    pub category: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            key: names(&["key", "id", "name", "campo"]),
            label: names(&["label", "pergunta", "titulo", "nome", "name"]),
            value: names(&["value", "valor", "resposta"]),
            category: names(&["category", "categoria", "secao", "grupo"]),
        }
    }
}

/// Converts untrusted JSON into a [`Response`].
#[derive(Debug, Clone, Default)]
pub struct FieldNormalizer {
    mapping: FieldMapping,
}

impl FieldNormalizer {
    /// Create a normalizer with the default mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with a custom entry mapping.
    #[must_use]
    pub const fn with_mapping(mapping: FieldMapping) -> Self {
        Self { mapping }
    }

    /// Get the entry mapping.
    #[must_use]
    pub const fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Normalize JSON text. Invalid JSON yields an empty response.
    #[must_use]
    pub fn normalize_str(&self, raw: &str) -> Response {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.normalize(&value),
            Err(e) => {
                tracing::debug!(error = %e, "response is not valid JSON, rendering empty");
                Response::empty()
            }
        }
    }

    /// Normalize a raw record.
    #[must_use]
    pub fn normalize(&self, raw: &Value) -> Response {
        let Some(root) = raw.as_object() else {
            if !raw.is_null() {
                tracing::debug!("response root is not an object, rendering empty");
            }
            return Response::empty();
        };

        let id = match root.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let created_at = root.get("criado_em").and_then(parse_timestamp);

        let entries = root
            .get("dados")
            .and_then(|d| d.get("campos"))
            .and_then(Value::as_array);
        let fields = match entries {
            Some(entries) => self.normalize_entries(entries),
            None => {
                tracing::debug!(id = %id, "response has no dados.campos array");
                Vec::new()
            }
        };

        Response {
            id,
            created_at,
            fields,
        }
    }

    fn normalize_entries(&self, entries: &[Value]) -> Vec<Field> {
        let mut seen = HashSet::with_capacity(entries.len());
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut field = self.normalize_entry(index, entry);
                if seen.contains(&field.key) {
                    let mut unique = format!("{}_{index}", field.key);
                    while seen.contains(&unique) {
                        unique.push('_');
                    }
                    field.key = unique;
                }
                seen.insert(field.key.clone());
                field
            })
            .collect()
    }

    fn normalize_entry(&self, index: usize, entry: &Value) -> Field {
        let synthetic = format!("field_{index}");
        let Value::Object(obj) = entry else {
            return Field {
                label: synthetic.clone(),
                key: synthetic,
                value: coerce_value(entry),
                category: None,
            };
        };

        let key = lookup(obj, &self.mapping.key)
            .and_then(scalar_string)
            .filter(|k| !k.is_empty())
            .unwrap_or(synthetic);
        let label = lookup(obj, &self.mapping.label)
            .and_then(scalar_string)
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| key.clone());
        let value = lookup(obj, &self.mapping.value).map_or(FieldValue::Null, coerce_value);
        let category = lookup(obj, &self.mapping.category)
            .and_then(scalar_string)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Field {
            key,
            label,
            value,
            category,
        }
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, candidates: &[String]) -> Option<&'a Value> {
    candidates.iter().find_map(|name| obj.get(name))
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce any JSON value to its display primitive.
///
/// Objects and arrays are stringified, never rendered recursively.
#[must_use]
pub fn coerce_value(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => coerce_number(n),
        Value::String(s) => FieldValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => FieldValue::Text(value.to_string()),
    }
}

/// Integers that `f64` cannot hold exactly keep their digits as text.
fn coerce_number(n: &Number) -> FieldValue {
    let exact = if let Some(i) = n.as_i64() {
        (i as f64) as i128 == i128::from(i)
    } else if let Some(u) = n.as_u64() {
        (u as f64) as u128 == u128::from(u)
    } else {
        true
    };
    match n.as_f64() {
        Some(f) if exact => FieldValue::Number(f),
        _ => FieldValue::Text(n.to_string()),
    }
}

/// Parse `criado_em`: RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]` as UTC, or epoch
/// milliseconds.
#[must_use]
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
                        .iter()
                        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                        .map(|naive| naive.and_utc())
                })
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
