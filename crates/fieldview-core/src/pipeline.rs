//! Field transformation pipeline.
//!
//! Stages run in a fixed order: empty-filter, search-filter, sort, group.
//! Each stage is a pure function over owned field lists and can be disabled
//! independently through [`PipelineConfig`].

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Label of the bucket collecting fields without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Field ordering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SortMode {
    /// Source order
    #[default]
    Original,
    /// Ascending by label, case-insensitive
    Alphabetical,
    /// Answered fields before unanswered ones
    FilledFirst,
    /// Unanswered fields before answered ones
    EmptyFirst,
}

impl SortMode {
    /// All modes in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Original,
        Self::Alphabetical,
        Self::FilledFirst,
        Self::EmptyFirst,
    ];

    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Alphabetical => "alphabetical",
            Self::FilledFirst => "filled-first",
            Self::EmptyFirst => "empty-first",
        }
    }

    /// Parse a mode name, accepting kebab-case, camelCase and snake_case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "original" => Some(Self::Original),
            "alphabetical" => Some(Self::Alphabetical),
            "filled-first" | "filledfirst" => Some(Self::FilledFirst),
            "empty-first" | "emptyfirst" => Some(Self::EmptyFirst),
            _ => None,
        }
    }

    /// Parse a mode name, falling back to [`SortMode::Original`] with a
    /// configuration warning.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(sort_mode = s, "unrecognized sort mode, using original order");
            Self::Original
        })
    }
}

impl From<String> for SortMode {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline settings, owned by the host and read once per render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Free-text search; blank disables the search stage
    pub search_query: String,
    /// Drop fields whose value is empty
    pub hide_empty: bool,
    /// Ordering mode
    pub sort_mode: SortMode,
    /// Bucket fields by category
    pub grouping_enabled: bool,
}

impl PipelineConfig {
    /// Create a config with every stage disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set search query.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Set empty-filter.
    #[must_use]
    pub const fn hide_empty(mut self, hide: bool) -> Self {
        self.hide_empty = hide;
        self
    }

    /// Set sort mode.
    #[must_use]
    pub const fn sort(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    /// Set grouping.
    #[must_use]
    pub const fn grouping(mut self, enabled: bool) -> Self {
        self.grouping_enabled = enabled;
        self
    }
}

/// One category bucket of a grouped model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    /// Source category, `None` for the uncategorized bucket
    pub category: Option<String>,
    /// Header text
    pub label: String,
    /// Fields in pipeline order
    pub fields: Vec<Field>,
}

/// Pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum RenderModel {
    /// Ordered fields
    Flat(Vec<Field>),
    /// Ordered category buckets
    Grouped(Vec<FieldGroup>),
}

impl Default for RenderModel {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl RenderModel {
    /// Total number of fields across all buckets.
    #[must_use]
    pub fn field_count(&self) -> usize {
        match self {
            Self::Flat(fields) => fields.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.fields.len()).sum(),
        }
    }

    /// Whether no field survived the pipeline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Whether the model is grouped.
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// Iterate over every field in render order.
    pub fn fields(&self) -> Box<dyn Iterator<Item = &Field> + '_> {
        match self {
            Self::Flat(fields) => Box::new(fields.iter()),
            Self::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.fields.iter())),
        }
    }
}

/// Runs the empty-filter, search, sort and group stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldPipeline;

impl FieldPipeline {
    /// Create a new pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run every enabled stage over `fields`.
    #[must_use]
    pub fn run(&self, fields: &[Field], config: &PipelineConfig) -> RenderModel {
        let mut fields = fields.to_vec();
        if config.hide_empty {
            fields = self.hide_empty(fields);
        }
        fields = self.search(fields, &config.search_query);
        fields = self.sort(fields, config.sort_mode);
        if config.grouping_enabled {
            self.group(fields)
        } else {
            RenderModel::Flat(fields)
        }
    }

    /// Drop fields with empty values, preserving order.
    #[must_use]
    pub fn hide_empty(&self, fields: Vec<Field>) -> Vec<Field> {
        fields.into_iter().filter(|f| !f.is_empty()).collect()
    }

    /// Keep fields whose label or display value contains `query`,
    /// case-insensitively. A blank query keeps everything.
    #[must_use]
    pub fn search(&self, fields: Vec<Field>, query: &str) -> Vec<Field> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return fields;
        }
        fields
            .into_iter()
            .filter(|f| {
                f.label.to_lowercase().contains(&needle)
                    || f.display_value().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Reorder fields. Every mode is stable.
    #[must_use]
    pub fn sort(&self, mut fields: Vec<Field>, mode: SortMode) -> Vec<Field> {
        match mode {
            SortMode::Original => fields,
            SortMode::Alphabetical => {
                fields.sort_by_cached_key(|f| f.label.to_lowercase());
                fields
            }
            SortMode::FilledFirst | SortMode::EmptyFirst => {
                let (filled, empty): (Vec<_>, Vec<_>) =
                    fields.into_iter().partition(|f| !f.is_empty());
                let (mut first, second) = if mode == SortMode::FilledFirst {
                    (filled, empty)
                } else {
                    (empty, filled)
                };
                first.extend(second);
                first
            }
        }
    }

    /// Bucket fields by category in first-seen order, uncategorized last.
    /// Stays flat when no field declares a category.
    #[must_use]
    pub fn group(&self, fields: Vec<Field>) -> RenderModel {
        if fields.iter().all(|f| f.category.is_none()) {
            return RenderModel::Flat(fields);
        }

        // a real "Uncategorized" category shares the bucket of fields without one
        let mut groups: Vec<FieldGroup> = Vec::new();
        let mut has_uncategorized = false;
        for field in fields {
            let label = field.category.as_deref().unwrap_or(UNCATEGORIZED);
            has_uncategorized |= field.category.is_none();
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.fields.push(field),
                None => groups.push(FieldGroup {
                    label: label.to_string(),
                    category: field.category.clone(),
                    fields: vec![field],
                }),
            }
        }
        if has_uncategorized {
            if let Some(pos) = groups.iter().position(|g| g.label == UNCATEGORIZED) {
                let mut bucket = groups.remove(pos);
                bucket.category = None;
                groups.push(bucket);
            }
        }
        RenderModel::Grouped(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    fn keys(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.key.as_str()).collect()
    }

    fn flat(model: RenderModel) -> Vec<Field> {
        match model {
            RenderModel::Flat(fields) => fields,
            RenderModel::Grouped(_) => panic!("expected flat model"),
        }
    }

    fn sample() -> Vec<Field> {
        vec![
            Field::new("a", "a", "1"),
            Field::new("b", "b", ""),
            Field::new("c", "c", "2"),
        ]
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("filled-first"), Some(SortMode::FilledFirst));
        assert_eq!(SortMode::parse("filledFirst"), Some(SortMode::FilledFirst));
        assert_eq!(SortMode::parse("EMPTY_FIRST"), Some(SortMode::EmptyFirst));
        assert_eq!(SortMode::parse("random"), None);
        assert_eq!(SortMode::parse_lenient("random"), SortMode::Original);
    }

    #[test]
    fn test_sort_mode_roundtrip_names() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_sort_mode_deserialize_lenient() {
        let mode: SortMode = serde_json::from_str("\"alphabetical\"").unwrap();
        assert_eq!(mode, SortMode::Alphabetical);
        let mode: SortMode = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(mode, SortMode::Original);
    }

    #[test]
    fn test_config_deserialize_camel_case() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{"searchQuery":"x","hideEmpty":true,"sortMode":"empty-first","groupingEnabled":true}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            PipelineConfig::new()
                .search("x")
                .hide_empty(true)
                .sort(SortMode::EmptyFirst)
                .grouping(true)
        );
    }

    #[test]
    fn test_filled_first() {
        let out = FieldPipeline::new().sort(sample(), SortMode::FilledFirst);
        assert_eq!(keys(&out), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_empty_first() {
        let out = FieldPipeline::new().sort(sample(), SortMode::EmptyFirst);
        assert_eq!(keys(&out), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_alphabetical_stable() {
        let fields = vec![
            Field::new("1", "beta", "x"),
            Field::new("2", "Alpha", "x"),
            Field::new("3", "alpha", "x"),
        ];
        let out = FieldPipeline::new().sort(fields, SortMode::Alphabetical);
        assert_eq!(keys(&out), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_search_label_and_value() {
        let fields = vec![
            Field::new("t", "Total Pago", "150"),
            Field::new("s", "Status", "Ativo"),
            Field::new("n", "Nota", "total geral"),
        ];
        let out = FieldPipeline::new().search(fields, "  TOTAL ");
        assert_eq!(keys(&out), vec!["t", "n"]);
    }

    #[test]
    fn test_search_blank_keeps_all() {
        let out = FieldPipeline::new().search(sample(), "   ");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_hide_empty() {
        let fields = vec![
            Field::new("x", "x", "x"),
            Field::new("n", "n", FieldValue::Null),
            Field::new("e", "e", ""),
        ];
        let model = FieldPipeline::new().run(&fields, &PipelineConfig::new().hide_empty(true));
        assert_eq!(keys(&flat(model)), vec!["x"]);
    }

    #[test]
    fn test_group_order() {
        let fields = vec![
            Field::new("1", "1", "x").category("A"),
            Field::new("2", "2", "x"),
            Field::new("3", "3", "x").category("A"),
        ];
        let model = FieldPipeline::new().run(&fields, &PipelineConfig::new().grouping(true));
        let RenderModel::Grouped(groups) = model else {
            panic!("expected grouped model");
        };
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["A", UNCATEGORIZED]);
        assert_eq!(keys(&groups[0].fields), vec!["1", "3"]);
        assert!(groups[1].category.is_none());
    }

    #[test]
    fn test_group_named_uncategorized_merges_with_missing() {
        let fields = vec![
            Field::new("a", "a", "x").category(UNCATEGORIZED),
            Field::new("b", "b", "x"),
            Field::new("c", "c", "x").category("X"),
        ];
        let model = FieldPipeline::new().run(&fields, &PipelineConfig::new().grouping(true));
        let RenderModel::Grouped(groups) = model else {
            panic!("expected grouped model");
        };
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["X", UNCATEGORIZED]);
        assert_eq!(keys(&groups[1].fields), vec!["a", "b"]);
        assert!(groups[1].category.is_none());
    }

    #[test]
    fn test_group_named_uncategorized_alone_keeps_position() {
        let fields = vec![
            Field::new("a", "a", "x").category(UNCATEGORIZED),
            Field::new("c", "c", "x").category("X"),
        ];
        let model = FieldPipeline::new().run(&fields, &PipelineConfig::new().grouping(true));
        let RenderModel::Grouped(groups) = model else {
            panic!("expected grouped model");
        };
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec![UNCATEGORIZED, "X"]);
        assert_eq!(groups[0].category.as_deref(), Some(UNCATEGORIZED));
    }

    #[test]
    fn test_group_without_categories_stays_flat() {
        let model = FieldPipeline::new().run(&sample(), &PipelineConfig::new().grouping(true));
        assert!(!model.is_grouped());
        assert_eq!(model.field_count(), 3);
    }

    #[test]
    fn test_group_respects_sort() {
        let fields = vec![
            Field::new("1", "zeta", "x").category("A"),
            Field::new("2", "alpha", "x").category("A"),
        ];
        let config = PipelineConfig::new()
            .grouping(true)
            .sort(SortMode::Alphabetical);
        let model = FieldPipeline::new().run(&fields, &config);
        let order: Vec<_> = model.fields().map(|f| f.key.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
    }

    #[test]
    fn test_empty_model() {
        let model = FieldPipeline::new().run(&[], &PipelineConfig::new().grouping(true));
        assert!(model.is_empty());
        assert_eq!(model, RenderModel::default());
    }
}
