//! Which style properties the host editor should show.
//!
//! Visibility is derived from the active layout's descriptor, so the editor
//! offers exactly the keys the layout reads. A key that depends on a toggle
//! is additionally hidden while the toggle is off.

use crate::config::PresentationConfig;
use fieldview_layout::StyleKey;

/// Whether `key` should be editable under `config`.
#[must_use]
pub fn is_style_visible(key: StyleKey, config: &PresentationConfig) -> bool {
    let descriptor = config.settings.layout_id().descriptor();
    if !descriptor.uses(key) {
        return false;
    }
    key.requires()
        .map_or(true, |toggle| descriptor.uses(toggle) && config.style.flag(toggle))
}

/// Every visible style key, in declaration order.
#[must_use]
pub fn visible_style_keys(config: &PresentationConfig) -> Vec<StyleKey> {
    StyleKey::ALL
        .iter()
        .copied()
        .filter(|key| is_style_visible(*key, config))
        .collect()
}
