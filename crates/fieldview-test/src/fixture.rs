//! Raw response fixtures.
//!
//! Builds records in the upstream wire shape so tests exercise the
//! normalizer exactly as production input does.
//!
//! # Example
//!
//! ```
//! use fieldview_test::ResponseFixture;
//! use serde_json::json;
//!
//! let raw = ResponseFixture::new("r-1")
//!     .field("nome", "Nome", json!("Ana"))
//!     .field_in("total", "Total", json!(10), "Pagamento")
//!     .build();
//! assert_eq!(raw["dados"]["campos"].as_array().map(Vec::len), Some(2));
//! ```

use serde_json::{json, Map, Value};

/// Builder for a raw response record.
#[derive(Debug, Clone, Default)]
pub struct ResponseFixture {
    id: Value,
    created_at: Option<Value>,
    entries: Vec<Value>,
}

impl ResponseFixture {
    /// Start a record with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Value::String(id.into()),
            created_at: None,
            entries: Vec::new(),
        }
    }

    /// Set `criado_em`.
    #[must_use]
    pub fn created_at(mut self, timestamp: impl Into<Value>) -> Self {
        self.created_at = Some(timestamp.into());
        self
    }

    /// Add an uncategorized field entry.
    #[must_use]
    pub fn field(mut self, key: &str, label: &str, value: Value) -> Self {
        self.entries
            .push(json!({ "key": key, "label": label, "value": value }));
        self
    }

    /// Add a field entry with a category.
    #[must_use]
    pub fn field_in(mut self, key: &str, label: &str, value: Value, category: &str) -> Self {
        self.entries.push(json!({
            "key": key,
            "label": label,
            "value": value,
            "category": category,
        }));
        self
    }

    /// Add an arbitrary entry as-is.
    #[must_use]
    pub fn entry(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    /// Number of entries added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the raw record.
    #[must_use]
    pub fn build(self) -> Value {
        let mut root = Map::new();
        root.insert("id".to_string(), self.id);
        if let Some(created_at) = self.created_at {
            root.insert("criado_em".to_string(), created_at);
        }
        root.insert("dados".to_string(), json!({ "campos": self.entries }));
        Value::Object(root)
    }

    /// Build the raw record as JSON text.
    #[must_use]
    pub fn to_json_string(self) -> String {
        self.build().to_string()
    }
}

/// A registration form answer with categories, empty answers and mixed
/// value types.
#[must_use]
pub fn registration() -> ResponseFixture {
    ResponseFixture::new("resp-0001")
        .created_at("2024-05-14T09:12:44Z")
        .field_in("nome", "Nome completo", json!("Ana Souza"), "Dados pessoais")
        .field_in("email", "E-mail", json!(null), "Dados pessoais")
        .field_in("telefone", "Telefone", json!(""), "Dados pessoais")
        .field_in("plano", "Plano escolhido", json!("Premium"), "Assinatura")
        .field_in("total", "Total Pago", json!(199.9), "Assinatura")
        .field("status", "Status", json!("Ativo"))
        .field("aceite", "Aceitou os termos", json!(true))
        .field("tags", "Tags", json!(["vip", "beta"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_shape() {
        let raw = ResponseFixture::new("x")
            .created_at(1_715_678_000_000_i64)
            .field("a", "A", json!(1))
            .build();
        assert_eq!(raw["id"], json!("x"));
        assert_eq!(raw["criado_em"], json!(1_715_678_000_000_i64));
        assert_eq!(raw["dados"]["campos"][0]["label"], json!("A"));
    }

    #[test]
    fn test_no_created_at() {
        let raw = ResponseFixture::new("x").build();
        assert!(raw.get("criado_em").is_none());
        assert_eq!(raw["dados"]["campos"], json!([]));
    }

    #[test]
    fn test_registration() {
        let fixture = registration();
        assert_eq!(fixture.len(), 8);
        assert!(!fixture.is_empty());
    }
}
