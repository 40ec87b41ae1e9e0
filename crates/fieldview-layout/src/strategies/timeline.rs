//! Timeline layout: a dot per field joined by a vertical line.

use super::{field_node, interleave, label, value};
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
    StyleKey::TimelineLineColor,
    StyleKey::TimelineDotColor,
];

pub(crate) fn render_fields(
    fields: &[Field],
    style: &StyleSlice,
    options: RenderOptions,
) -> Vec<RenderNode> {
    let dot_color = style.get(StyleKey::TimelineDotColor);
    let entries = fields
        .iter()
        .map(|field| {
            // hollow dot marks an unanswered entry
            let fill = if field.is_empty() { "hollow" } else { "solid" };
            field_node(field, options)
                .attr("direction", "row")
                .child(
                    RenderNode::new(NodeKind::TimelineDot)
                        .attr("color", dot_color)
                        .attr("fill", fill),
                )
                .child(label(field, style))
                .child(value(field, style))
        })
        .collect();
    let line_color = style.get(StyleKey::TimelineLineColor).to_string();
    interleave(entries, || {
        RenderNode::new(NodeKind::TimelineLine).attr("color", line_color.clone())
    })
}
