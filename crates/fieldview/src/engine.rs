//! The presentation engine: normalize, transform, lay out.

use fieldview_config::{DisplaySettings, PresentationConfig};
use fieldview_core::{FieldMapping, FieldNormalizer, FieldPipeline, PipelineConfig, RenderModel};
use fieldview_layout::{LayoutRegistry, RenderNode, StyleConfig};
use serde_json::Value;

/// Stateless orchestrator from a raw record to a render tree.
#[derive(Debug, Clone, Default)]
pub struct PresentationEngine {
    normalizer: FieldNormalizer,
    pipeline: FieldPipeline,
    registry: LayoutRegistry,
}

impl PresentationEngine {
    /// Create an engine with the default field mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine reading field entries through `mapping`.
    #[must_use]
    pub fn with_mapping(mapping: FieldMapping) -> Self {
        Self {
            normalizer: FieldNormalizer::with_mapping(mapping),
            ..Self::default()
        }
    }

    /// Create an engine for a configuration, honoring its field mapping.
    #[must_use]
    pub fn for_config(config: &PresentationConfig) -> Self {
        config
            .field_mapping
            .clone()
            .map_or_else(Self::new, Self::with_mapping)
    }

    /// The normalizer in use.
    #[must_use]
    pub const fn normalizer(&self) -> &FieldNormalizer {
        &self.normalizer
    }

    /// Normalize and transform a record without laying it out.
    #[must_use]
    pub fn model(&self, raw: &Value, pipeline: &PipelineConfig) -> RenderModel {
        let response = self.normalizer.normalize(raw);
        self.pipeline.run(&response.fields, pipeline)
    }

    /// Lay out an already transformed model.
    #[must_use]
    pub fn layout(
        &self,
        model: &RenderModel,
        settings: &DisplaySettings,
        style: &StyleConfig,
    ) -> RenderNode {
        self.registry.render_layout(
            settings.layout_id(),
            model,
            style,
            settings.render_options(),
        )
    }

    /// Render a raw record.
    ///
    /// Pure: the same inputs always produce an equal tree.
    #[must_use]
    pub fn present(
        &self,
        raw: &Value,
        settings: &DisplaySettings,
        style: &StyleConfig,
    ) -> RenderNode {
        let model = self.model(raw, &settings.pipeline);
        tracing::trace!(
            layout = %settings.layout_id(),
            fields = model.field_count(),
            grouped = model.is_grouped(),
            "presenting response"
        );
        self.layout(&model, settings, style)
    }

    /// Render a raw record under a full configuration.
    #[must_use]
    pub fn present_config(&self, raw: &Value, config: &PresentationConfig) -> RenderNode {
        self.present(raw, &config.settings, &config.style)
    }
}
