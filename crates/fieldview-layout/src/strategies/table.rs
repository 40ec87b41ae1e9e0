//! Table layout: a heading row followed by one striped row per field.

use super::labeled_field;
use crate::registry::RenderOptions;
use crate::style::{StyleKey, StyleSlice};
use crate::tree::{NodeKind, RenderNode};
use fieldview_core::Field;

const LABEL_HEADING: &str = "Campo";
const VALUE_HEADING: &str = "Valor";

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
    StyleKey::TableHeaderBackgroundColor,
    StyleKey::TableStripeColor,
];

fn header(style: &StyleSlice) -> RenderNode {
    let heading = |text: &str| {
        RenderNode::new(NodeKind::Label)
            .text(text)
            .attr("color", style.get(StyleKey::LabelColor))
            .attr("font-weight", style.get(StyleKey::LabelFontWeight))
    };
    RenderNode::new(NodeKind::TableHeader)
        .attr("background", style.get(StyleKey::TableHeaderBackgroundColor))
        .child(heading(LABEL_HEADING))
        .child(heading(VALUE_HEADING))
}

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    let rows = fields.iter().enumerate().map(|(i, field)| {
        let row = RenderNode::new(NodeKind::TableRow)
            .key(&field.key)
            .attr("padding", style.get(StyleKey::FieldPadding));
        let row = if i % 2 == 1 {
            row.attr("background", style.get(StyleKey::TableStripeColor))
        } else {
            row
        };
        row.child(labeled_field(field, style, options).attr("direction", "row"))
    });
    std::iter::once(header(style)).chain(rows).collect()
}
