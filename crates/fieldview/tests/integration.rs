//! End-to-end tests: raw record to render tree.

use fieldview::{
    ClipboardResult, ClipboardService, CopyFeedback, DisplaySettings, LayoutId, MemoizedEngine,
    MemoryClipboard, NodeKind, PipelineConfig, PresentationConfig, PresentationEngine, SortMode,
    StyleConfig, StyleKey, DEFAULT_FEEDBACK_DURATION,
};
use fieldview_test::{registration, ResponseFixture, TreeHarness};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::time::Instant;

fn present(raw: &Value, settings: &DisplaySettings) -> TreeHarness {
    TreeHarness::new(PresentationEngine::new().present(raw, settings, &StyleConfig::new()))
}

fn with_pipeline(pipeline: PipelineConfig) -> DisplaySettings {
    DisplaySettings::new().pipeline(pipeline)
}

// =============================================================================
// Pipeline through the engine
// =============================================================================

#[test]
fn test_sort_stability() {
    let raw = ResponseFixture::new("s")
        .field("a", "A", json!("1"))
        .field("b", "B", json!(""))
        .field("c", "C", json!("2"))
        .build();

    present(&raw, &with_pipeline(PipelineConfig::new().sort(SortMode::FilledFirst)))
        .assert_field_order(&["a", "c", "b"]);
    present(&raw, &with_pipeline(PipelineConfig::new().sort(SortMode::EmptyFirst)))
        .assert_field_order(&["b", "a", "c"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let raw = ResponseFixture::new("s")
        .field("total", "Total Pago", json!(10))
        .field("status", "Status", json!("Ativo"))
        .build();
    present(&raw, &with_pipeline(PipelineConfig::new().search("total")))
        .assert_field_order(&["total"]);
}

#[test]
fn test_hide_empty() {
    let raw = ResponseFixture::new("h")
        .field("x", "X", json!("x"))
        .field("n", "N", json!(null))
        .field("e", "E", json!(""))
        .build();
    present(&raw, &with_pipeline(PipelineConfig::new().hide_empty(true)))
        .assert_count("field", 1)
        .assert_not_exists("empty-value");
}

#[test]
fn test_grouping_buckets() {
    let raw = ResponseFixture::new("g")
        .field_in("a1", "A1", json!(1), "A")
        .field("n", "N", json!(2))
        .field_in("a2", "A2", json!(3), "A")
        .build();
    let harness = present(&raw, &with_pipeline(PipelineConfig::new().grouping(true)));
    harness
        .assert_count("group", 2)
        .assert_text("group#A group-header", "A")
        .assert_field_order(&["a1", "a2", "n"]);
    let headers: Vec<_> = harness
        .query_all("group-header")
        .into_iter()
        .filter_map(|n| n.text.as_deref())
        .collect();
    assert_eq!(headers, vec!["A", "Uncategorized"]);
}

#[test]
fn test_full_registration_pipeline() {
    let settings = DisplaySettings::new().layout("table").pipeline(
        PipelineConfig::new()
            .hide_empty(true)
            .sort(SortMode::Alphabetical)
            .grouping(true),
    );
    let harness = present(&registration().build(), &settings);
    harness
        .assert_exists("[layout=table]")
        .assert_count("group", 3)
        .assert_count("table-header", 3)
        .assert_field_order(&["nome", "plano", "total", "aceite", "status", "tags"])
        .assert_text("#tags value", "[\"vip\",\"beta\"]");
}

// =============================================================================
// Layout behavior through the engine
// =============================================================================

#[test]
fn test_unknown_layout_matches_card() {
    let raw = registration().build();
    let engine = PresentationEngine::new();
    let style = StyleConfig::new();
    assert_eq!(
        engine.present(&raw, &DisplaySettings::new().layout("nonexistent"), &style),
        engine.present(&raw, &DisplaySettings::new().layout("card"), &style),
    );
}

#[test]
fn test_empty_state() {
    for raw in [
        ResponseFixture::new("e").build(),
        json!({ "id": "e" }),
        json!("not an object"),
        Value::Null,
    ] {
        present(&raw, &DisplaySettings::new())
            .assert_empty_state()
            .assert_text("empty-state", "Sem resposta");
    }
}

#[test]
fn test_copy_flow() {
    let raw = registration().build();
    let settings = DisplaySettings::new().layout("compact").copy_to_clipboard(true);
    let harness = present(&raw, &settings);
    harness.assert_exists("field#total[copyable=true][copy-text=199.9]");

    let response = PresentationEngine::new().normalizer().normalize(&raw);
    let field = response.field("total").unwrap();
    let mut service = ClipboardService::new(MemoryClipboard::new(), settings.enable_copy_to_clipboard);
    let result = service.copy(field);
    assert_eq!(result, ClipboardResult::Success);
    assert_eq!(service.backend().read_text().as_deref(), Some("199.9"));

    let now = Instant::now();
    let mut feedback = CopyFeedback::new(DEFAULT_FEEDBACK_DURATION);
    feedback.record(&field.key, &result, now);
    assert!(feedback.is_active("total", now));
    assert!(!feedback.is_active("total", now + DEFAULT_FEEDBACK_DURATION));
}

#[test]
fn test_copy_disabled_has_no_hints() {
    present(&registration().build(), &DisplaySettings::new())
        .assert_not_exists("[copyable=true]");
}

#[test]
fn test_present_config_from_yaml() {
    let config = PresentationConfig::parse(
        "layout: list\nhideEmpty: true\nstyle:\n  showDivider: false\n",
        fieldview::ConfigFormat::Yaml,
    )
    .unwrap();
    let tree = PresentationEngine::new().present_config(&registration().build(), &config);
    TreeHarness::new(tree)
        .assert_exists("[layout=list]")
        .assert_count("divider", 0)
        .assert_count("field", 6);
}

// =============================================================================
// Properties
// =============================================================================

fn arb_settings() -> impl Strategy<Value = DisplaySettings> {
    (
        prop::sample::select(LayoutId::ALL.to_vec()),
        prop::sample::select(SortMode::ALL.to_vec()),
        any::<bool>(),
        any::<bool>(),
        prop::sample::select(vec!["", "a", "total", "Nome"]),
        any::<bool>(),
    )
        .prop_map(|(layout, sort, hide, group, search, copy)| {
            DisplaySettings::new()
                .layout(layout.as_str())
                .copy_to_clipboard(copy)
                .pipeline(
                    PipelineConfig::new()
                        .sort(sort)
                        .hide_empty(hide)
                        .grouping(group)
                        .search(search),
                )
        })
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("(id|dados|campos|key|label|value|[a-z]{1,4})", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_present_is_total_and_pure(raw in arb_json(), settings in arb_settings()) {
        let engine = PresentationEngine::new();
        let style = StyleConfig::new();
        let first = engine.present(&raw, &settings, &style);
        let second = engine.present(&raw, &settings, &style);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_memoized_matches_plain(
        settings in prop::collection::vec(arb_settings(), 1..6),
        divider in any::<bool>(),
    ) {
        let raw = registration().build();
        let style = StyleConfig::new().with(StyleKey::ShowDivider, divider.to_string());
        let engine = PresentationEngine::new();
        let mut memo = MemoizedEngine::new(engine.clone());
        for s in &settings {
            prop_assert_eq!(memo.present(&raw, s, &style), engine.present(&raw, s, &style));
        }
        prop_assert_eq!(memo.hits() + memo.misses(), settings.len());
    }

    #[test]
    fn prop_field_nodes_match_surviving_fields(settings in arb_settings()) {
        let raw = registration().build();
        let engine = PresentationEngine::new();
        let model = engine.model(&raw, &settings.pipeline);
        let tree = engine.present(&raw, &settings, &StyleConfig::new());
        let expected: Vec<&str> = model.fields().map(|f| f.key.as_str()).collect();
        prop_assert_eq!(tree.field_keys(), expected);
        if model.is_empty() {
            prop_assert_eq!(tree.kind, NodeKind::EmptyState);
        }
    }
}
