//! Badge layout: each answer shown as a colored pill beside its label.

use super::{empty_value, field_node, label};
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
    StyleKey::ValueFontSize,
    StyleKey::EmptyValueText,
    StyleKey::EmptyValueColor,
    StyleKey::GroupHeaderColor,
    StyleKey::GroupHeaderFontSize,
    StyleKey::BadgeBackgroundColor,
    StyleKey::BadgeTextColor,
];

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    fields
        .iter()
        .map(|field| {
            let pill = if field.is_empty() {
                empty_value(style)
            } else {
                RenderNode::new(NodeKind::Badge)
                    .text(field.display_value())
                    .attr("background", style.get(StyleKey::BadgeBackgroundColor))
                    .attr("color", style.get(StyleKey::BadgeTextColor))
                    .attr("font-size", style.get(StyleKey::ValueFontSize))
            };
            field_node(field, options)
                .attr("direction", "row")
                .child(label(field, style))
                .child(pill)
        })
        .collect()
}
