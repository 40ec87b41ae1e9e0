//! Minimal layout: label and value text only, no container chrome.

use super::labeled_field;
use crate::descriptor::LayoutId;
use crate::registry::RenderOptions;
use crate::style::{StyleKey, StyleSlice};
use crate::tree::{NodeKind, RenderNode};
use fieldview_core::Field;

pub(crate) const STYLE_KEYS: &[StyleKey] = &[
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
];

pub(crate) fn container(style: &StyleSlice) -> RenderNode {
    RenderNode::new(NodeKind::Container)
        .attr("layout", LayoutId::Minimal.as_str())
        .attr("gap", style.get(StyleKey::FieldGap))
}

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    fields
        .iter()
        .map(|field| labeled_field(field, style, options))
        .collect()
}
