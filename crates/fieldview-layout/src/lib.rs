#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Layout strategies for the fieldview presentation engine.
//!
//! Ten layouts turn a [`RenderModel`](fieldview_core::RenderModel) into a
//! structural [`RenderNode`] tree:
//!
//! card, list, compact, grid, inline, bordered, timeline, table, minimal, badge
//!
//! # Style isolation
//!
//! Each layout declares the style keys it reads in its [`LayoutDescriptor`].
//! At render time the full [`StyleConfig`] is projected onto that set, so
//! changing a key outside it can never change the layout's output.

mod descriptor;
mod registry;
mod strategies;
mod style;
mod tree;

pub use descriptor::{LayoutDescriptor, LayoutId, DESCRIPTORS};
pub use registry::{LayoutRegistry, RenderOptions};
pub use style::{is_truthy, StyleConfig, StyleKey, StyleSlice};
pub use tree::{NodeKind, RenderNode};
