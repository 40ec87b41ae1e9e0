//! Grid layout: fields as cells of a fixed column count.

use super::{framed_container, labeled_field};
use crate::descriptor::LayoutId;
use crate::registry::RenderOptions;
use crate::style::{StyleKey, StyleSlice};
use crate::tree::RenderNode;
use fieldview_core::Field;

const DEFAULT_COLUMNS: usize = 2;

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
    StyleKey::GridColumns,
];

/// Column count from `gridColumns`; anything but a positive integer means 2.
pub(crate) fn columns(style: &StyleSlice) -> usize {
    style
        .get(StyleKey::GridColumns)
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

pub(crate) fn container(style: &StyleSlice) -> RenderNode {
    framed_container(LayoutId::Grid, style).attr("columns", columns(style).to_string())
}

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    let columns = columns(style);
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            labeled_field(field, style, options)
                .attr("row", (i / columns).to_string())
                .attr("column", (i % columns).to_string())
                .attr("background", style.get(StyleKey::FieldBackgroundColor))
                .attr("padding", style.get(StyleKey::FieldPadding))
                .attr("border-radius", style.get(StyleKey::FieldBorderRadius))
        })
        .collect()
}
