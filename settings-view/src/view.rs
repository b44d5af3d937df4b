//! Host container for a settings list.
//!
//! [`SettingsView`] owns the adapter, tracks the scroll position, and saves
//! and restores state through a [`StateBundle`] when the host recreates it.

use std::ops::Range;

use log::debug;

use crate::adapter::SettingsAdapter;
use crate::bundle::{BundleBackend, StateBundle};
use crate::error::BundleError;
use crate::persist::{ITEM_KEY_PREFIX, SCROLL_KEY, SavedState, ScrollPosition};

#[derive(Debug, Default)]
pub struct SettingsView {
    adapter: Option<SettingsAdapter>,
    scroll: ScrollPosition,
    /// Item records restored before an adapter was attached.
    pending: Option<SavedState>,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view with `adapter` already attached.
    pub fn with_adapter(adapter: SettingsAdapter) -> Self {
        let mut view = Self::new();
        view.attach(adapter);
        view
    }

    /// Attach `adapter`, replacing any previous one.
    ///
    /// Records from an earlier [`restore_state`](Self::restore_state) that
    /// found no adapter are applied now.
    pub fn attach(&mut self, adapter: SettingsAdapter) {
        if let Some(previous) = self.adapter.take() {
            previous.bridge().cancel_all();
        }
        if let Some(pending) = self.pending.take() {
            let applied = pending.apply(&adapter);
            debug!("Applied {} pending record(s) on attach", applied);
        }
        adapter.notify_data_set_changed();
        self.adapter = Some(adapter);
        self.clamp_scroll();
    }

    /// Detach the adapter. Host requests it still has in flight are dropped.
    pub fn detach(&mut self) -> Option<SettingsAdapter> {
        let adapter = self.adapter.take()?;
        let cancelled = adapter.bridge().cancel_all();
        if cancelled > 0 {
            debug!("Dropped {} in-flight host request(s) on detach", cancelled);
        }
        Some(adapter)
    }

    pub fn adapter(&self) -> Option<&SettingsAdapter> {
        self.adapter.as_ref()
    }

    fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, SettingsAdapter::item_count)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    /// Scroll so that `top_index` is the first row, `offset` units past the top.
    pub fn scroll_to(&mut self, top_index: usize, offset: i32) {
        self.scroll = ScrollPosition::new(top_index, offset);
        self.clamp_scroll();
    }

    /// Move the first visible row by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize) {
        let top = self.scroll.top_index.saturating_add_signed(delta);
        self.scroll_to(top, 0);
    }

    /// Scroll the minimum amount so `position` is inside a viewport of `rows` rows.
    pub fn scroll_into_view(&mut self, position: usize, rows: usize) {
        let top = self.scroll.top_index;
        if position < top {
            self.scroll_to(position, 0);
        } else if rows > 0 && position >= top + rows {
            self.scroll_to(position + 1 - rows, 0);
        }
    }

    /// Positions visible in a viewport of `rows` rows.
    pub fn visible_range(&self, rows: usize) -> Range<usize> {
        let start = self.scroll.top_index.min(self.item_count());
        let end = (start + rows).min(self.item_count());
        start..end
    }

    fn clamp_scroll(&mut self) {
        let Some(adapter) = &self.adapter else {
            return;
        };
        let count = adapter.item_count();
        if count == 0 {
            self.scroll = ScrollPosition::default();
        } else if self.scroll.top_index >= count {
            self.scroll = ScrollPosition::new(count - 1, 0);
        }
    }

    // -------------------------------------------------------------------------
    // Save / restore
    // -------------------------------------------------------------------------

    /// Write toggle state and the scroll position into `bundle`.
    pub fn save_state<B: BundleBackend>(&self, bundle: &mut StateBundle<B>) -> Result<(), BundleError> {
        let state = match &self.adapter {
            Some(adapter) => {
                let mut scroll = self.scroll;
                if adapter.item_count() == 0 {
                    scroll.offset = 0;
                }
                SavedState::capture(adapter, scroll)
            }
            None => SavedState {
                items: Vec::new(),
                scroll: ScrollPosition::new(self.scroll.top_index, 0),
            },
        };
        state.write_to(bundle)?;
        debug!(
            "Saved {} item record(s), top {} offset {}",
            state.items.len(),
            state.scroll.top_index,
            state.scroll.offset
        );
        Ok(())
    }

    /// Read saved state from `bundle` and apply it, then remove the consumed keys.
    ///
    /// Records for keywords the current items do not carry are dropped. With no
    /// adapter attached, item records are kept until the next
    /// [`attach`](Self::attach).
    pub fn restore_state<B: BundleBackend>(&mut self, bundle: &mut StateBundle<B>) -> Result<(), BundleError> {
        let state = SavedState::read_from(bundle)?;
        self.scroll = state.scroll;

        match &self.adapter {
            Some(adapter) => {
                let applied = state.apply(adapter);
                adapter.notify_data_set_changed();
                debug!("Restored {} of {} item record(s)", applied, state.items.len());
                self.clamp_scroll();
            }
            None => {
                debug!("No adapter attached, holding {} record(s)", state.items.len());
                self.pending = Some(state);
            }
        }

        for key in bundle.keys_with_prefix(ITEM_KEY_PREFIX) {
            bundle.delete(&key);
        }
        bundle.delete(SCROLL_KEY);
        Ok(())
    }
}
