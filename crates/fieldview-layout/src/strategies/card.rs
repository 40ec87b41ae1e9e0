//! Card layout: every field in its own filled, rounded box.

use super::labeled_field;
use crate::registry::RenderOptions;
use crate::style::{StyleKey, StyleSlice};
use crate::tree::RenderNode;
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
    StyleKey::FieldBackgroundColor,
    StyleKey::FieldPadding,
    StyleKey::FieldBorderRadius,
];

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    fields
        .iter()
        .map(|field| {
            labeled_field(field, style, options)
                .attr("direction", "column")
                .attr("background", style.get(StyleKey::FieldBackgroundColor))
                .attr("padding", style.get(StyleKey::FieldPadding))
                .attr("border-radius", style.get(StyleKey::FieldBorderRadius))
        })
        .collect()
}
