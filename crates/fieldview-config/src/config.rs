//! Presentation configuration: display settings plus the style table.
//!
//! The on-disk shape mirrors the host editor's property schema, with
//! camelCase names at the top level:
//!
//! ```yaml
//! layout: timeline
//! enableCopyToClipboard: true
//! sortMode: filled-first
//! hideEmpty: false
//! groupingEnabled: true
//! style:
//!   timelineDotColor: "#0a7d3b"
//!   emptyValueText: "-"
//! ```

use crate::error::ConfigError;
use fieldview_core::{FieldMapping, PipelineConfig};
use fieldview_layout::{LayoutId, RenderOptions, StyleConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Display settings chosen in the host editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Layout identifier; unknown ids render as card
    pub layout: String,
    /// Show copy affordances on fields
    pub enable_copy_to_clipboard: bool,
    /// Pipeline settings
    #[serde(flatten)]
    pub pipeline: PipelineConfig,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            layout: LayoutId::Card.as_str().to_string(),
            enable_copy_to_clipboard: false,
            pipeline: PipelineConfig::default(),
        }
    }
}

impl DisplaySettings {
    /// Create default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set layout.
    #[must_use]
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set copy-to-clipboard.
    #[must_use]
    pub const fn copy_to_clipboard(mut self, enabled: bool) -> Self {
        self.enable_copy_to_clipboard = enabled;
        self
    }

    /// Set pipeline settings.
    #[must_use]
    pub fn pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Resolved layout, card when the id is unknown.
    #[must_use]
    pub fn layout_id(&self) -> LayoutId {
        LayoutId::parse_lenient(&self.layout)
    }

    /// Render options derived from the settings.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions::copy(self.enable_copy_to_clipboard)
    }
}

/// Complete presentation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationConfig {
    /// Display settings
    #[serde(flatten)]
    pub settings: DisplaySettings,
    /// Style overrides
    pub style: StyleConfig,
    /// Field entry property names, when the source uses its own schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mapping: Option<FieldMapping>,
}

impl PresentationConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display settings.
    #[must_use]
    pub fn with_settings(mut self, settings: DisplaySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set style table.
    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Parse configuration text in the given format.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid for the format.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml_ng::from_str(text)?,
            ConfigFormat::Toml => toml::from_str(text)?,
            ConfigFormat::Json => serde_json::from_str(text)?,
        };
        Ok(config)
    }

    /// Serialize the configuration in the given format.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn render(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let text = match format {
            ConfigFormat::Yaml => serde_yaml_ng::to_string(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }

    /// Load a configuration file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, has an unknown extension or
    /// does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading presentation config");
        Self::parse(&text, format)
    }

    /// Write the configuration to a file in the format named by its extension.
    ///
    /// # Errors
    ///
    /// Returns error if the extension is unknown or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let text = self.render(format)?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldview_core::SortMode;
    use fieldview_layout::StyleKey;

    #[test]
    fn test_defaults() {
        let config = PresentationConfig::new();
        assert_eq!(config.settings.layout, "card");
        assert!(!config.settings.enable_copy_to_clipboard);
        assert_eq!(config.settings.pipeline.sort_mode, SortMode::Original);
        assert!(config.field_mapping.is_none());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.YAML")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("a.ini")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r##"
layout: timeline
enableCopyToClipboard: true
sortMode: filledFirst
hideEmpty: true
searchQuery: total
style:
  timelineDotColor: "#0a7d3b"
  gridColumns: 3
"##;
        let config = PresentationConfig::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.settings.layout_id(), LayoutId::Timeline);
        assert!(config.settings.render_options().copy_enabled);
        assert_eq!(config.settings.pipeline.sort_mode, SortMode::FilledFirst);
        assert!(config.settings.pipeline.hide_empty);
        assert_eq!(config.settings.pipeline.search_query, "total");
        assert_eq!(config.style.get(StyleKey::TimelineDotColor), "#0a7d3b");
        assert_eq!(config.style.get(StyleKey::GridColumns), "3");
    }

    #[test]
    fn test_parse_toml() {
        let text = r##"
layout = "grid"
groupingEnabled = true

[style]
gridColumns = "4"
showDivider = false
"##;
        let config = PresentationConfig::parse(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.settings.layout_id(), LayoutId::Grid);
        assert!(config.settings.pipeline.grouping_enabled);
        assert_eq!(config.style.get(StyleKey::GridColumns), "4");
        assert!(!config.style.flag(StyleKey::ShowDivider));
    }

    #[test]
    fn test_parse_json_with_mapping() {
        let text = r#"{ "layout": "badge", "fieldMapping": { "key": ["slug"] } }"#;
        let config = PresentationConfig::parse(text, ConfigFormat::Json).unwrap();
        let mapping = config.field_mapping.unwrap();
        assert_eq!(mapping.key, vec!["slug".to_string()]);
        // unlisted alias lists keep their defaults
        assert!(mapping.value.contains(&"valor".to_string()));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = PresentationConfig::parse(
            r#"{ "layout": "carousel", "sortMode": "random" }"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert_eq!(config.settings.layout_id(), LayoutId::Card);
        assert_eq!(config.settings.pipeline.sort_mode, SortMode::Original);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PresentationConfig::new()
            .with_settings(DisplaySettings::new().layout("list").copy_to_clipboard(true))
            .with_style(StyleConfig::new().with(StyleKey::DividerColor, "#ccc"));
        let text = config.render(ConfigFormat::Json).unwrap();
        assert_eq!(PresentationConfig::parse(&text, ConfigFormat::Json).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = PresentationConfig::parse("layout: [unclosed", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
