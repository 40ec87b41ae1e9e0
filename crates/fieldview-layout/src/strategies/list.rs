//! List layout: plain rows, optionally separated by dividers.

use super::{interleave, labeled_field};
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
    StyleKey::ShowDivider,
    StyleKey::DividerColor,
];

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    let rows: Vec<RenderNode> = fields
        .iter()
        .map(|field| labeled_field(field, style, options).attr("direction", "column"))
        .collect();
    if !style.flag(StyleKey::ShowDivider) {
        return rows;
    }
    let color = style.get(StyleKey::DividerColor).to_string();
    interleave(rows, || {
        RenderNode::new(NodeKind::Divider).attr("color", color.clone())
    })
}
