//! Saved view state: the records written to a bundle across recreation.
//!
//! Only fields that can change at runtime and must survive are saved:
//! currently a toggle's `enabled` and `checked`. Other transient state, such
//! as a spinner's selection, is rebuilt from the item list the host supplies.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::adapter::SettingsAdapter;
use crate::bundle::{BundleBackend, StateBundle};
use crate::error::BundleError;
use crate::item::SettingItem;

/// Bundle key prefix for per-item records. The keyword follows the prefix.
pub const ITEM_KEY_PREFIX: &str = "item:";
/// Bundle key of the scroll position.
pub const SCROLL_KEY: &str = "scroll";

/// Mutable fields of one item, tagged with the item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavedItem {
    Toggle { enabled: bool, checked: bool },
}

impl SavedItem {
    /// Record of `item`, or `None` for kinds with nothing to restore.
    pub fn capture(item: &SettingItem) -> Option<Self> {
        match item {
            SettingItem::Toggle(toggle) => Some(Self::Toggle {
                enabled: toggle.is_enabled(),
                checked: toggle.is_checked(),
            }),
            _ => None,
        }
    }

    /// Write the record back. Returns false if `item` is of another kind.
    pub fn apply(&self, item: &mut SettingItem) -> bool {
        match (self, item) {
            (Self::Toggle { enabled, checked }, SettingItem::Toggle(toggle)) => {
                toggle.set_enabled(*enabled);
                toggle.set_checked(*checked);
                true
            }
            _ => false,
        }
    }
}

/// First visible row and how far it is scrolled past the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub top_index: usize,
    pub offset: i32,
}

impl ScrollPosition {
    pub fn new(top_index: usize, offset: i32) -> Self {
        Self { top_index, offset }
    }
}

/// Everything a settings view saves, keyed by item keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    pub items: Vec<(String, SavedItem)>,
    pub scroll: ScrollPosition,
}

impl SavedState {
    /// Capture restorable fields of every item in `adapter`.
    pub fn capture(adapter: &SettingsAdapter, scroll: ScrollPosition) -> Self {
        let items = adapter.store().read(|items| {
            items
                .iter()
                .filter_map(|item| SavedItem::capture(item).map(|saved| (item.keyword().to_string(), saved)))
                .collect()
        });
        Self { items, scroll }
    }

    /// Replace the item records and scroll position held by `bundle`.
    ///
    /// Item records already present are removed first, so a reused bundle
    /// carries no record for an item that no longer exists.
    pub fn write_to<B: BundleBackend>(&self, bundle: &mut StateBundle<B>) -> Result<(), BundleError> {
        for key in bundle.keys_with_prefix(ITEM_KEY_PREFIX) {
            bundle.delete(&key);
        }
        for (keyword, saved) in &self.items {
            bundle.set(&format!("{ITEM_KEY_PREFIX}{keyword}"), saved)?;
        }
        bundle.set(SCROLL_KEY, &self.scroll)?;
        trace!("Wrote {} item record(s) to bundle", self.items.len());
        Ok(())
    }

    pub fn read_from<B: BundleBackend>(bundle: &StateBundle<B>) -> Result<Self, BundleError> {
        let mut items = Vec::new();
        for key in bundle.keys_with_prefix(ITEM_KEY_PREFIX) {
            let Some(keyword) = key.strip_prefix(ITEM_KEY_PREFIX) else {
                trace!("Skipping bundle key '{}' outside the item prefix", key);
                continue;
            };
            let Some(saved) = bundle.get::<SavedItem>(&key)? else {
                continue;
            };
            items.push((keyword.to_string(), saved));
        }
        let scroll = bundle.get(SCROLL_KEY)?.unwrap_or_default();
        Ok(Self { items, scroll })
    }

    /// Write saved fields into the items of `adapter`, matched by keyword.
    ///
    /// Records whose keyword no longer exists, or now names an item of
    /// another kind, are dropped. Returns how many records were applied.
    pub fn apply(&self, adapter: &SettingsAdapter) -> usize {
        let mut applied = 0;
        for (keyword, saved) in &self.items {
            match adapter.update_item_by_keyword(keyword, |item| saved.apply(item)) {
                Some(true) => applied += 1,
                Some(false) => debug!("Saved record for '{}' does not match the item kind", keyword),
                None => debug!("Dropping saved record for unknown keyword '{}'", keyword),
            }
        }
        applied
    }
}
