//! Style table and per-layout style slices.
//!
//! Style values are opaque tokens (colors, lengths, font weights) that are
//! passed through to the render tree without CSS validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::Cell;
use std::collections::BTreeMap;

macro_rules! style_keys {
    ($($variant:ident => $name:literal, $default:literal;)+) => {
        /// A named style or display configuration value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleKey {
            $(
                #[doc = concat!("`", $name, "` (default `", $default, "`)")]
                $variant,
            )+
        }

        impl StyleKey {
            /// Every key in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Property name as used by the host editor.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Default value token.
            #[must_use]
            pub const fn default_value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $default,)+
                }
            }

            /// Look up a key by property name.
            #[must_use]
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

style_keys! {
    ContainerPadding => "containerPadding", "24px";
    ContainerBackgroundColor => "containerBackgroundColor", "#ffffff";
    ContainerBorderRadius => "containerBorderRadius", "8px";
    ContainerBorderColor => "containerBorderColor", "#e0e0e0";
    ContainerBorderWidth => "containerBorderWidth", "1px";
    FieldGap => "fieldGap", "16px";
    LabelColor => "labelColor", "#081B4E";
    LabelFontSize => "labelFontSize", "14px";
    LabelFontWeight => "labelFontWeight", "600";
    ValueColor => "valueColor", "#333333";
    ValueFontSize => "valueFontSize", "15px";
    EmptyValueText => "emptyValueText", "Sem resposta";
    EmptyValueColor => "emptyValueColor", "#999999";
    FieldBackgroundColor => "fieldBackgroundColor", "#f8f9fa";
    FieldPadding => "fieldPadding", "12px 16px";
    FieldBorderRadius => "fieldBorderRadius", "6px";
    ShowDivider => "showDivider", "true";
    DividerColor => "dividerColor", "#e0e0e0";
    GroupHeaderColor => "groupHeaderColor", "#081B4E";
    GroupHeaderFontSize => "groupHeaderFontSize", "16px";
    GridColumns => "gridColumns", "2";
    InlineSeparator => "inlineSeparator", "•";
    BorderAccentColor => "borderAccentColor", "#081B4E";
    TimelineLineColor => "timelineLineColor", "#e0e0e0";
    TimelineDotColor => "timelineDotColor", "#081B4E";
    TableHeaderBackgroundColor => "tableHeaderBackgroundColor", "#f1f3f5";
    TableStripeColor => "tableStripeColor", "#fafbfc";
    BadgeBackgroundColor => "badgeBackgroundColor", "#e8edf9";
    BadgeTextColor => "badgeTextColor", "#081B4E";
}

impl StyleKey {
    /// A toggle that must be on for this key to have any effect.
    #[must_use]
    pub const fn requires(&self) -> Option<Self> {
        match self {
            Self::DividerColor => Some(Self::ShowDivider),
            _ => None,
        }
    }
}

impl std::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpret a token as a boolean toggle.
#[must_use]
pub fn is_truthy(token: &str) -> bool {
    matches!(
        token.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Full style table: overrides on top of per-key defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Value>",
    into = "BTreeMap<String, String>"
)]
pub struct StyleConfig {
    values: BTreeMap<StyleKey, String>,
}

impl StyleConfig {
    /// Create a table with every key at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a key.
    #[must_use]
    pub fn with(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Override a key in place.
    pub fn set(&mut self, key: StyleKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Reset a key to its default.
    pub fn reset(&mut self, key: StyleKey) {
        self.values.remove(&key);
    }

    /// Effective value of a key.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> &str {
        self.values
            .get(&key)
            .map_or_else(|| key.default_value(), String::as_str)
    }

    /// Effective toggle value of a key.
    #[must_use]
    pub fn flag(&self, key: StyleKey) -> bool {
        is_truthy(self.get(key))
    }

    /// Keys that carry an explicit override.
    pub fn overrides(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Project the table onto `keys`.
    #[must_use]
    pub fn slice(&self, keys: &'static [StyleKey]) -> StyleSlice {
        StyleSlice {
            values: keys.iter().map(|k| (*k, self.get(*k).to_string())).collect(),
            undeclared_reads: Cell::new(0),
        }
    }
}

fn token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<BTreeMap<String, Value>> for StyleConfig {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut config = Self::new();
        for (name, value) in raw {
            let Some(key) = StyleKey::parse(&name) else {
                tracing::warn!(key = %name, "ignoring unknown style key");
                continue;
            };
            match token(&value) {
                Some(token) => config.set(key, token),
                None => tracing::warn!(key = %name, "style value is not a scalar, using default"),
            }
        }
        config
    }
}

impl From<StyleConfig> for BTreeMap<String, String> {
    fn from(config: StyleConfig) -> Self {
        config
            .values
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect()
    }
}

/// The part of the style table one layout is allowed to read.
///
/// Reads of keys outside the slice return an empty token and are counted,
/// so a strategy can never depend on a key it did not declare.
#[derive(Debug, Clone)]
pub struct StyleSlice {
    values: BTreeMap<StyleKey, String>,
    undeclared_reads: Cell<u32>,
}

impl StyleSlice {
    /// Value of a declared key.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> &str {
        if let Some(value) = self.values.get(&key) {
            value
        } else {
            tracing::warn!(key = %key, "layout read a style key it does not declare");
            self.undeclared_reads.set(self.undeclared_reads.get() + 1);
            ""
        }
    }

    /// Toggle value of a declared key.
    #[must_use]
    pub fn flag(&self, key: StyleKey) -> bool {
        is_truthy(self.get(key))
    }

    /// Whether `key` is part of the slice.
    #[must_use]
    pub fn contains(&self, key: StyleKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of reads of undeclared keys so far.
    #[must_use]
    pub fn undeclared_reads(&self) -> u32 {
        self.undeclared_reads.get()
    }
}
