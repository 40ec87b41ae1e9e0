//! Layout registry: selects a strategy by identifier and builds the tree.

use crate::descriptor::{LayoutDescriptor, LayoutId, DESCRIPTORS};
use crate::strategies;
use crate::style::{StyleConfig, StyleSlice};
use crate::tree::{NodeKind, RenderNode};
use fieldview_core::{FieldGroup, RenderModel};

/// Display switches that affect node construction but not styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Mark field nodes as copyable and attach their copy text
    pub copy_enabled: bool,
}

impl RenderOptions {
    /// Options with copy hints on or off.
    #[must_use]
    pub const fn copy(copy_enabled: bool) -> Self {
        Self { copy_enabled }
    }
}

/// Registry of the ten layout strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegistry;

impl LayoutRegistry {
    /// Create the registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Descriptor for an identifier, `None` when unknown.
    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<&'static LayoutDescriptor> {
        LayoutId::parse(id).map(|layout| layout.descriptor())
    }

    /// All descriptors in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &'static [LayoutDescriptor] {
        &DESCRIPTORS
    }

    /// Render with the layout named `id`, falling back to card when the
    /// identifier is unknown.
    #[must_use]
    pub fn render(
        &self,
        id: &str,
        model: &RenderModel,
        style: &StyleConfig,
        options: RenderOptions,
    ) -> RenderNode {
        self.render_layout(LayoutId::parse_lenient(id), model, style, options)
    }

    /// Render with a known layout.
    #[must_use]
    pub fn render_layout(
        &self,
        layout: LayoutId,
        model: &RenderModel,
        style: &StyleConfig,
        options: RenderOptions,
    ) -> RenderNode {
        let slice = style.slice(layout.descriptor().style_keys);
        let root = render_with(layout, model, &slice, options);
        if slice.undeclared_reads() > 0 {
            tracing::warn!(
                layout = %layout,
                reads = slice.undeclared_reads(),
                "layout read undeclared style keys"
            );
        }
        root
    }
}

fn render_with(
    layout: LayoutId,
    model: &RenderModel,
    style: &StyleSlice,
    options: RenderOptions,
) -> RenderNode {
    if model.is_empty() {
        return strategies::empty_state(layout, style);
    }
    let container = strategies::container(layout, style);
    match model {
        RenderModel::Flat(fields) => {
            container.children(strategies::render_fields(layout, fields, style, options))
        }
        RenderModel::Grouped(groups) => container.children(
            groups
                .iter()
                .filter(|group| !group.fields.is_empty())
                .map(|group| render_group(layout, group, style, options)),
        ),
    }
}

fn render_group(
    layout: LayoutId,
    group: &FieldGroup,
    style: &StyleSlice,
    options: RenderOptions,
) -> RenderNode {
    RenderNode::new(NodeKind::Group)
        .key(&group.label)
        .child(strategies::group_header(&group.label, style))
        .children(strategies::render_fields(
            layout,
            &group.fields,
            style,
            options,
        ))
}
