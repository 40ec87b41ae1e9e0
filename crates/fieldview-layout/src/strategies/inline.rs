//! Inline layout: all fields flow on one wrapping line.

use super::{framed_container, interleave, labeled_field};
use crate::descriptor::LayoutId;
use crate::registry::RenderOptions;
use crate::style::{StyleKey, StyleSlice};
use crate::tree::{NodeKind, RenderNode};
use fieldview_core::Field;

pub(crate) const STYLE_KEYS: &[StyleKey] = &[
    StyleKey::ContainerPadding,
    StyleKey::ContainerBackgroundColor,
    StyleKey::ContainerBorderRadius,
    StyleKey::ContainerBorderColor,
    StyleKey::ContainerBorderWidth,
    StyleKey::FieldGap,
    StyleKey::LabelColor,
    StyleKey::LabelFontSize,
    StyleKey::LabelFontWeight,
    StyleKey::ValueColor,
    StyleKey::ValueFontSize,
    StyleKey::EmptyValueText,
    StyleKey::EmptyValueColor,
    StyleKey::GroupHeaderColor,
    StyleKey::GroupHeaderFontSize,
    StyleKey::InlineSeparator,
];

pub(crate) fn container(style: &StyleSlice) -> RenderNode {
    framed_container(LayoutId::Inline, style)
        .attr("direction", "row")
        .attr("wrap", "true")
}

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    let fields = fields
        .iter()
        .map(|field| labeled_field(field, style, options).attr("direction", "row"))
        .collect();
    let separator = style.get(StyleKey::InlineSeparator).to_string();
    interleave(fields, || {
        RenderNode::new(NodeKind::Separator).text(separator.clone())
    })
}
