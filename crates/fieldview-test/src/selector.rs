//! Selector parsing for render-tree queries.
//!
//! Grammar: `[kind]['#' key]('[' name '=' value ']')*`, at least one part.

use fieldview_layout::{NodeKind, RenderNode};

/// Parsed selector. All present parts must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Node kind
    pub kind: Option<NodeKind>,
    /// Node key
    pub key: Option<String>,
    /// Attribute equalities
    pub attrs: Vec<(String, String)>,
}

/// Error from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Kind name that is not a node kind
    UnknownKind(String),
    /// Malformed attribute part
    InvalidAttribute(String),
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnknownKind(kind) => write!(f, "unknown node kind: {kind}"),
            Self::InvalidAttribute(part) => write!(f, "invalid attribute selector: {part}"),
        }
    }
}

impl std::error::Error for SelectorError {}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is empty, names an unknown kind or
    /// has a malformed attribute part.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let (head, mut rest) = input
            .find('[')
            .map_or((input, ""), |i| (&input[..i], &input[i..]));
        let (kind, key) = match head.split_once('#') {
            Some((kind, key)) => (kind, Some(key.to_string())),
            None => (head, None),
        };
        let kind = if kind.is_empty() {
            None
        } else {
            Some(NodeKind::parse(kind).ok_or_else(|| SelectorError::UnknownKind(kind.to_string()))?)
        };

        let mut attrs = Vec::new();
        while !rest.is_empty() {
            let end = rest
                .find(']')
                .ok_or_else(|| SelectorError::InvalidAttribute(rest.to_string()))?;
            let part = &rest[1..end];
            let (name, value) = part
                .split_once('=')
                .ok_or_else(|| SelectorError::InvalidAttribute(part.to_string()))?;
            attrs.push((name.trim().to_string(), value.trim().trim_matches('\'').to_string()));
            rest = &rest[end + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return Err(SelectorError::InvalidAttribute(rest.to_string()));
            }
        }

        Ok(Self { kind, key, attrs })
    }

    /// Check if this selector matches a node.
    #[must_use]
    pub fn matches(&self, node: &RenderNode) -> bool {
        self.kind.map_or(true, |kind| node.kind == kind)
            && self
                .key
                .as_deref()
                .map_or(true, |key| node.key.as_deref() == Some(key))
            && self
                .attrs
                .iter()
                .all(|(name, value)| node.get_attr(name) == Some(value.as_str()))
    }
}
