//! Structural render tree handed to the hosting view layer.
//!
//! Nodes carry layout-specific decoration hints in `attrs`. Attribute maps
//! are ordered so two renders of the same input compare equal with `==`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Kind of render node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Layout root
    Container,
    /// One category bucket
    Group,
    /// Category title
    GroupHeader,
    /// One field
    Field,
    /// Field label
    Label,
    /// Field value
    Value,
    /// Placeholder for an empty value, rendered beside its label
    EmptyValue,
    /// Placeholder for a record with nothing to show
    EmptyState,
    /// Line between list rows
    Divider,
    /// Separator between inline fields
    Separator,
    /// Timeline marker
    TimelineDot,
    /// Timeline connector
    TimelineLine,
    /// Table column headings
    TableHeader,
    /// Table row
    TableRow,
    /// Pill-shaped value
    Badge,
}

impl NodeKind {
    /// Every kind in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Container,
        Self::Group,
        Self::GroupHeader,
        Self::Field,
        Self::Label,
        Self::Value,
        Self::EmptyValue,
        Self::EmptyState,
        Self::Divider,
        Self::Separator,
        Self::TimelineDot,
        Self::TimelineLine,
        Self::TableHeader,
        Self::TableRow,
        Self::Badge,
    ];

    /// Look up a kind by its kebab-case name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Kebab-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Group => "group",
            Self::GroupHeader => "group-header",
            Self::Field => "field",
            Self::Label => "label",
            Self::Value => "value",
            Self::EmptyValue => "empty-value",
            Self::EmptyState => "empty-state",
            Self::Divider => "divider",
            Self::Separator => "separator",
            Self::TimelineDot => "timeline-dot",
            Self::TimelineLine => "timeline-line",
            Self::TableHeader => "table-header",
            Self::TableRow => "table-row",
            Self::Badge => "badge",
        }
    }
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Node kind
    pub kind: NodeKind,
    /// Field key or group label, when the node represents one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Decoration hints
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Create an empty node.
    #[must_use]
    pub const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            text: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a decoration hint.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Add a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Add children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a decoration hint.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Depth-first, pre-order traversal including `self`.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// All nodes of `kind`, in document order.
    #[must_use]
    pub fn find_all(&self, kind: NodeKind) -> Vec<&Self> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.kind == kind {
                found.push(node);
            }
        });
        found
    }

    /// First node of `kind`.
    #[must_use]
    pub fn find(&self, kind: NodeKind) -> Option<&Self> {
        self.find_all(kind).into_iter().next()
    }

    /// Count nodes of `kind`.
    #[must_use]
    pub fn count(&self, kind: NodeKind) -> usize {
        self.find_all(kind).len()
    }

    /// Keys of every `Field` node in document order.
    #[must_use]
    pub fn field_keys(&self) -> Vec<&str> {
        self.find_all(NodeKind::Field)
            .into_iter()
            .filter_map(|n| n.key.as_deref())
            .collect()
    }

    /// Indented outline, one node per line.
    #[must_use]
    pub fn to_outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}{}", "", self.kind.as_str(), indent = depth * 2);
        if let Some(key) = &self.key {
            let _ = write!(out, " #{key}");
        }
        if let Some(text) = &self.text {
            let _ = write!(out, " {text:?}");
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}={value}");
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}
