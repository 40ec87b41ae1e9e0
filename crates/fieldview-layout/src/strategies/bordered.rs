//! Bordered layout: fields marked by an accent stripe on the left.

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
    StyleKey::FieldPadding,
    StyleKey::BorderAccentColor,
];

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    let accent = format!("3px solid {}", style.get(StyleKey::BorderAccentColor));
    fields
        .iter()
        .map(|field| {
            labeled_field(field, style, options)
                .attr("direction", "column")
                .attr("border-left", accent.clone())
                .attr("padding", style.get(StyleKey::FieldPadding))
        })
        .collect()
}
