//! fieldview: dynamic field presentation engine.
//!
//! Turns a loosely structured form response into a render tree under one of
//! ten layouts:
//!
//! ```
//! use fieldview::{DisplaySettings, PresentationEngine, PipelineConfig, SortMode, StyleConfig};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "id": "r-1",
//!     "dados": { "campos": [
//!         { "key": "status", "label": "Status", "value": "Ativo" },
//!         { "key": "email", "label": "E-mail", "value": null }
//!     ]}
//! });
//! let settings = DisplaySettings::new()
//!     .layout("timeline")
//!     .pipeline(PipelineConfig::new().sort(SortMode::EmptyFirst));
//! let tree = PresentationEngine::new().present(&raw, &settings, &StyleConfig::new());
//! assert_eq!(tree.field_keys(), vec!["email", "status"]);
//! ```

mod engine;
mod memo;

pub use engine::PresentationEngine;
pub use memo::MemoizedEngine;

pub use fieldview_config::{
    is_style_visible, visible_style_keys, ConfigError, ConfigFormat, DisplaySettings,
    PresentationConfig,
};
pub use fieldview_core::*;
pub use fieldview_layout::{
    LayoutDescriptor, LayoutId, LayoutRegistry, NodeKind, RenderNode, RenderOptions, StyleConfig,
    StyleKey,
};

pub use fieldview_config as config;
pub use fieldview_layout as layout;
