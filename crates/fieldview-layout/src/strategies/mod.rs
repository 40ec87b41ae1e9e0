//! The ten layout strategies.
//!
//! Each submodule declares the exact style keys it reads in `STYLE_KEYS`
//! and exposes `render_fields`, a pure function from a run of fields to
//! render nodes. Container chrome, group headers and the empty state are
//! shared and built here.

pub(crate) mod badge;
pub(crate) mod bordered;
pub(crate) mod card;
pub(crate) mod compact;
pub(crate) mod grid;
pub(crate) mod inline;
pub(crate) mod list;
pub(crate) mod minimal;
pub(crate) mod table;
pub(crate) mod timeline;

use crate::descriptor::LayoutId;
use crate::registry::RenderOptions;
use crate::style::{StyleKey, StyleSlice};
use crate::tree::{NodeKind, RenderNode};
use fieldview_core::Field;

/// Render a run of fields (a flat model or one group) with `layout`.
pub(crate) fn render_fields(
    layout: LayoutId,
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    match layout {
        LayoutId::Card => card::render_fields(fields, style, options),
        LayoutId::List => list::render_fields(fields, style, options),
        LayoutId::Compact => compact::render_fields(fields, style, options),
        LayoutId::Grid => grid::render_fields(fields, style, options),
        LayoutId::Inline => inline::render_fields(fields, style, options),
        LayoutId::Bordered => bordered::render_fields(fields, style, options),
        LayoutId::Timeline => timeline::render_fields(fields, style, options),
        LayoutId::Table => table::render_fields(fields, style, options),
        LayoutId::Minimal => minimal::render_fields(fields, style, options),
        LayoutId::Badge => badge::render_fields(fields, style, options),
    }
}

/// Root node for `layout`.
pub(crate) fn container(layout: LayoutId, style: &StyleSlice) -> RenderNode {
    match layout {
        LayoutId::Grid => grid::container(style),
        LayoutId::Inline => inline::container(style),
        LayoutId::Minimal => minimal::container(style),
        _ => framed_container(layout, style),
    }
}

/// Container with the shared padding, background and border chrome.
pub(crate) fn framed_container(layout: LayoutId, style: &StyleSlice) -> RenderNode {
    let border = format!(
        "{} solid {}",
        style.get(StyleKey::ContainerBorderWidth),
        style.get(StyleKey::ContainerBorderColor)
    );
    RenderNode::new(NodeKind::Container)
        .attr("layout", layout.as_str())
        .attr("padding", style.get(StyleKey::ContainerPadding))
        .attr("background", style.get(StyleKey::ContainerBackgroundColor))
        .attr("border-radius", style.get(StyleKey::ContainerBorderRadius))
        .attr("border", border)
        .attr("gap", style.get(StyleKey::FieldGap))
}

/// Header node for a category bucket.
pub(crate) fn group_header(label: &str, style: &StyleSlice) -> RenderNode {
    RenderNode::new(NodeKind::GroupHeader)
        .text(label)
        .attr("color", style.get(StyleKey::GroupHeaderColor))
        .attr("font-size", style.get(StyleKey::GroupHeaderFontSize))
}

/// The single node shown when nothing survives the pipeline.
pub(crate) fn empty_state(layout: LayoutId, style: &StyleSlice) -> RenderNode {
    RenderNode::new(NodeKind::EmptyState)
        .text(style.get(StyleKey::EmptyValueText))
        .attr("layout", layout.as_str())
        .attr("color", style.get(StyleKey::EmptyValueColor))
}

/// Bare field node with copy hints.
pub(crate) fn field_node(field: &Field, options: RenderOptions) -> RenderNode {
    let node = RenderNode::new(NodeKind::Field).key(&field.key);
    if options.copy_enabled {
        node.attr("copyable", "true")
            .attr("copy-text", field.display_value())
    } else {
        node
    }
}

pub(crate) fn label(field: &Field, style: &StyleSlice) -> RenderNode {
    RenderNode::new(NodeKind::Label)
        .text(&field.label)
        .attr("color", style.get(StyleKey::LabelColor))
        .attr("font-size", style.get(StyleKey::LabelFontSize))
        .attr("font-weight", style.get(StyleKey::LabelFontWeight))
}

/// Inline placeholder for a field whose value is empty.
pub(crate) fn empty_value(style: &StyleSlice) -> RenderNode {
    RenderNode::new(NodeKind::EmptyValue)
        .text(style.get(StyleKey::EmptyValueText))
        .attr("color", style.get(StyleKey::EmptyValueColor))
}

/// Value node, or the empty-value placeholder.
pub(crate) fn value(field: &Field, style: &StyleSlice) -> RenderNode {
    if field.is_empty() {
        return empty_value(style);
    }
    RenderNode::new(NodeKind::Value)
        .text(field.display_value())
        .attr("color", style.get(StyleKey::ValueColor))
        .attr("font-size", style.get(StyleKey::ValueFontSize))
}

/// Field node holding its label and value.
pub(crate) fn labeled_field(
    field: &Field,
    style: &StyleSlice,
    options: RenderOptions,
) -> RenderNode {
    field_node(field, options)
        .child(label(field, style))
        .child(value(field, style))
}

/// Interleave `separator()` between nodes.
pub(crate) fn interleave(
    nodes: Vec<RenderNode>,
    mut separator: impl FnMut() -> RenderNode,
) -> Vec<RenderNode> {
    let mut out = Vec::with_capacity(nodes.len() * 2);
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            out.push(separator());
        }
        out.push(node);
    }
    out
}
