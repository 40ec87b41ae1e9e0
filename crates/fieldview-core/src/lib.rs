#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
//! Core types for the fieldview presentation engine.
//!
//! This crate provides the data side of the engine:
//! - Field model: [`Field`], [`FieldValue`], [`Response`]
//! - Normalization of untrusted records: [`FieldNormalizer`]
//! - The transformation pipeline: [`FieldPipeline`], [`RenderModel`]
//! - The copy-to-clipboard collaborator: [`ClipboardService`]

pub mod clipboard;
mod field;
mod normalize;
mod pipeline;

pub use clipboard::{
    ClipboardBackend, ClipboardResult, ClipboardService, CopyFeedback, MemoryClipboard,
    DEFAULT_FEEDBACK_DURATION,
};
pub use field::{Field, FieldValue, Response};
pub use normalize::{coerce_value, parse_timestamp, FieldMapping, FieldNormalizer};
pub use pipeline::{FieldGroup, FieldPipeline, PipelineConfig, RenderModel, SortMode, UNCATEGORIZED};
