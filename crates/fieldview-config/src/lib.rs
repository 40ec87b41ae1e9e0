#![allow(clippy::module_name_repetitions)]
//! Configuration for the fieldview presentation engine.
//!
//! - [`PresentationConfig`]: display settings and style table, loaded from
//!   YAML, TOML or JSON
//! - [`is_style_visible`] / [`visible_style_keys`]: the property editor's view
//!   of which style keys apply to the selected layout

mod config;
mod editor;
mod error;

pub use config::{ConfigFormat, DisplaySettings, PresentationConfig};
pub use editor::{is_style_visible, visible_style_keys};
pub use error::ConfigError;
