//! Layout identifiers and their static descriptors.

use crate::strategies;
use crate::style::StyleKey;
use serde::{Deserialize, Serialize};

/// One of the ten fixed layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutId {
    /// Field cards in a column
    #[default]
    Card,
    /// Rows with optional dividers
    List,
    /// Label and value on one line
    Compact,
    /// Multi-column cells
    Grid,
    /// One flowing line
    Inline,
    /// Accent left border per field
    Bordered,
    /// Vertical timeline
    Timeline,
    /// Two-column table
    Table,
    /// Text only, no chrome
    Minimal,
    /// Values as badges
    Badge,
}

impl LayoutId {
    /// All layouts in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Card,
        Self::List,
        Self::Compact,
        Self::Grid,
        Self::Inline,
        Self::Bordered,
        Self::Timeline,
        Self::Table,
        Self::Minimal,
        Self::Badge,
    ];

    /// Identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
            Self::Compact => "compact",
            Self::Grid => "grid",
            Self::Inline => "inline",
            Self::Bordered => "bordered",
            Self::Timeline => "timeline",
            Self::Table => "table",
            Self::Minimal => "minimal",
            Self::Badge => "badge",
        }
    }

    /// Parse an identifier, case-insensitively.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(id))
    }

    /// Parse an identifier, falling back to [`LayoutId::Card`] with a
    /// configuration warning.
    #[must_use]
    pub fn parse_lenient(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            tracing::warn!(layout = id, "unknown layout, falling back to card");
            Self::Card
        })
    }

    /// Static descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &'static LayoutDescriptor {
        &DESCRIPTORS[*self as usize]
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static facts about a layout.
#[derive(Debug, PartialEq, Eq)]
pub struct LayoutDescriptor {
    /// Layout identifier
    pub id: LayoutId,
    /// Every style key the layout reads
    pub style_keys: &'static [StyleKey],
    /// Whether group headers are rendered for grouped models
    pub renders_grouping: bool,
}

impl LayoutDescriptor {
    /// Whether the layout reads `key`.
    #[must_use]
    pub fn uses(&self, key: StyleKey) -> bool {
        self.style_keys.contains(&key)
    }
}

/// Descriptor table, indexed by `LayoutId as usize`.
pub static DESCRIPTORS: [LayoutDescriptor; 10] = [
    LayoutDescriptor {
        id: LayoutId::Card,
        style_keys: strategies::card::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::List,
        style_keys: strategies::list::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Compact,
        style_keys: strategies::compact::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Grid,
        style_keys: strategies::grid::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Inline,
        style_keys: strategies::inline::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Bordered,
        style_keys: strategies::bordered::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Timeline,
        style_keys: strategies::timeline::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Table,
        style_keys: strategies::table::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Minimal,
        style_keys: strategies::minimal::STYLE_KEYS,
        renders_grouping: true,
    },
    LayoutDescriptor {
        id: LayoutId::Badge,
        style_keys: strategies::badge::STYLE_KEYS,
        renders_grouping: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indexed_by_id() {
        for layout in LayoutId::ALL {
            assert_eq!(layout.descriptor().id, layout);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(LayoutId::parse("timeline"), Some(LayoutId::Timeline));
        assert_eq!(LayoutId::parse(" Badge "), Some(LayoutId::Badge));
        assert_eq!(LayoutId::parse("nonexistent"), None);
        assert_eq!(LayoutId::parse_lenient("nonexistent"), LayoutId::Card);
    }

    #[test]
    fn test_exclusive_keys() {
        let owners = |key: StyleKey| -> Vec<LayoutId> {
            LayoutId::ALL
                .into_iter()
                .filter(|l| l.descriptor().uses(key))
                .collect()
        };
        assert_eq!(owners(StyleKey::TimelineLineColor), vec![LayoutId::Timeline]);
        assert_eq!(owners(StyleKey::TimelineDotColor), vec![LayoutId::Timeline]);
        assert_eq!(owners(StyleKey::BorderAccentColor), vec![LayoutId::Bordered]);
        assert_eq!(owners(StyleKey::BadgeBackgroundColor), vec![LayoutId::Badge]);
        assert_eq!(owners(StyleKey::BadgeTextColor), vec![LayoutId::Badge]);
        assert_eq!(owners(StyleKey::ShowDivider), vec![LayoutId::List]);
        assert_eq!(owners(StyleKey::DividerColor), vec![LayoutId::List]);
    }

    #[test]
    fn test_every_layout_reads_empty_state_keys() {
        for layout in LayoutId::ALL {
            let descriptor = layout.descriptor();
            assert!(descriptor.uses(StyleKey::EmptyValueText), "{layout}");
            assert!(descriptor.uses(StyleKey::EmptyValueColor), "{layout}");
            assert!(descriptor.renders_grouping);
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for layout in LayoutId::ALL {
            let keys = layout.descriptor().style_keys;
            for (i, key) in keys.iter().enumerate() {
                assert!(!keys[i + 1..].contains(key), "{layout} lists {key} twice");
            }
        }
    }
}
