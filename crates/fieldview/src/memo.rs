//! Memoized engine for per-keystroke re-rendering.

use crate::engine::PresentationEngine;
use fieldview_config::DisplaySettings;
use fieldview_core::{Field, FieldPipeline, PipelineConfig, RenderModel};
use fieldview_layout::{RenderNode, StyleConfig};
use serde_json::Value;

#[derive(Debug, Clone)]
struct MemoEntry {
    fields: Vec<Field>,
    pipeline: PipelineConfig,
    model: RenderModel,
}

/// Engine that reuses the last pipeline result while the normalized fields
/// and pipeline settings are unchanged.
///
/// Style or layout edits then only pay for the layout pass. Output is always
/// equal to [`PresentationEngine::present`].
#[derive(Debug, Clone, Default)]
pub struct MemoizedEngine {
    engine: PresentationEngine,
    last: Option<MemoEntry>,
    hits: usize,
    misses: usize,
}

impl MemoizedEngine {
    /// Wrap an engine.
    #[must_use]
    pub const fn new(engine: PresentationEngine) -> Self {
        Self {
            engine,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Render a raw record, reusing the memoized model when possible.
    pub fn present(
        &mut self,
        raw: &Value,
        settings: &DisplaySettings,
        style: &StyleConfig,
    ) -> RenderNode {
        let fields = self.engine.normalizer().normalize(raw).fields;
        if let Some(memo) = self
            .last
            .as_ref()
            .filter(|memo| memo.pipeline == settings.pipeline && memo.fields == fields)
        {
            self.hits += 1;
            return self.engine.layout(&memo.model, settings, style);
        }

        self.misses += 1;
        let model = FieldPipeline::new().run(&fields, &settings.pipeline);
        let tree = self.engine.layout(&model, settings, style);
        self.last = Some(MemoEntry {
            fields,
            pipeline: settings.pipeline.clone(),
            model,
        });
        tree
    }

    /// Drop the memoized model and reset counters.
    pub fn clear(&mut self) {
        self.last = None;
        self.hits = 0;
        self.misses = 0;
    }

    /// Renders that reused the memoized model.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Renders that ran the pipeline.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Hit rate in `[0, 1]`, zero before the first render.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
