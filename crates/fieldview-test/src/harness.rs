//! Query and assertion harness over a render tree.

use crate::selector::Selector;
use fieldview_layout::{NodeKind, RenderNode};

/// Wraps a render tree for selector-based assertions.
///
/// Selectors: `field` (node kind), `#total` (key), `[layout=card]`
/// (attribute), or a kind followed by key and attribute parts such as
/// `field#total[copyable=true]`.
#[derive(Debug, Clone)]
pub struct TreeHarness {
    root: RenderNode,
}

impl TreeHarness {
    /// Create a harness over `root`.
    #[must_use]
    pub const fn new(root: RenderNode) -> Self {
        Self { root }
    }

    /// The wrapped tree.
    #[must_use]
    pub const fn root(&self) -> &RenderNode {
        &self.root
    }

    /// First node matching the selector.
    ///
    /// # Panics
    ///
    /// Panics if the selector is invalid.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&RenderNode> {
        self.query_all(selector).into_iter().next()
    }

    /// All nodes matching the selector, in document order.
    ///
    /// Whitespace-separated parts match descendants of the previous part's
    /// matches, as in `group#Pessoal field`.
    ///
    /// # Panics
    ///
    /// Panics if the selector is invalid.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&RenderNode> {
        let parts: Vec<Selector> = selector.split_whitespace().map(parse).collect();
        let Some((first, rest)) = parts.split_first() else {
            panic!("invalid selector '{selector}': empty selector");
        };

        let mut found = Vec::new();
        self.root.walk(&mut |node| {
            if first.matches(node) {
                found.push(node);
            }
        });
        for part in rest {
            let mut next: Vec<&RenderNode> = Vec::new();
            for scope in &found {
                for child in &scope.children {
                    child.walk(&mut |node| {
                        if part.matches(node) && !next.iter().any(|n| std::ptr::eq(*n, node)) {
                            next.push(node);
                        }
                    });
                }
            }
            found = next;
        }
        found
    }

    /// Whether any node matches.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Concatenated text of the first match and its descendants.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        let mut out = Vec::new();
        if let Some(node) = self.query(selector) {
            node.walk(&mut |n| {
                if let Some(text) = &n.text {
                    out.push(text.as_str());
                }
            });
        }
        out.join(" ")
    }

    /// Field keys in document order.
    #[must_use]
    pub fn field_keys(&self) -> Vec<&str> {
        self.root.field_keys()
    }

    /// Assert that a node exists.
    ///
    /// # Panics
    ///
    /// Panics if no node matches.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected node matching '{selector}' to exist in\n{}",
            self.root.to_outline()
        );
        self
    }

    /// Assert that no node exists.
    ///
    /// # Panics
    ///
    /// Panics if a node matches.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected no node matching '{selector}' in\n{}",
            self.root.to_outline()
        );
        self
    }

    /// Assert the text of the first match exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the number of matches.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} nodes matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert the field keys in document order.
    ///
    /// # Panics
    ///
    /// Panics if the order differs.
    pub fn assert_field_order(&self, expected: &[&str]) -> &Self {
        assert_eq!(self.field_keys(), expected, "field order");
        self
    }

    /// Assert the root is the empty state.
    ///
    /// # Panics
    ///
    /// Panics if the root is anything else.
    pub fn assert_empty_state(&self) -> &Self {
        assert_eq!(self.root.kind, NodeKind::EmptyState, "root kind");
        assert!(self.root.children.is_empty(), "empty state has children");
        self
    }
}

fn parse(selector: &str) -> Selector {
    match Selector::parse(selector) {
        Ok(parsed) => parsed,
        Err(e) => panic!("invalid selector '{selector}': {e}"),
    }
}
