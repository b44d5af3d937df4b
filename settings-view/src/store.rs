//! Shared item storage with change tracking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::item::SettingItem;

/// The ordered item collection behind an adapter.
///
/// `ItemStore` uses `Arc<RwLock<_>>` internally, so the adapter and every
/// handler it registers on a row share one collection. Handlers look items
/// up at the moment they fire instead of holding a copy taken at bind time.
/// Every write raises the dirty flag, which the host polls before redrawing.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Vec<SettingItem>>>,
    dirty: Arc<AtomicBool>,
}

impl ItemStore {
    pub fn new(items: Vec<SettingItem>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn len(&self) -> usize {
        self.read(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` with read access to the whole collection.
    pub fn read<R>(&self, f: impl FnOnce(&[SettingItem]) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Clone of the item at `position`.
    pub fn get(&self, position: usize) -> Option<SettingItem> {
        self.read(|items| items.get(position).cloned())
    }

    /// Clone of the whole collection.
    pub fn snapshot(&self) -> Vec<SettingItem> {
        self.read(|items| items.to_vec())
    }

    pub fn position_of(&self, keyword: &str) -> Option<usize> {
        self.read(|items| items.iter().position(|item| item.keyword() == keyword))
    }

    /// Mutate the item at `position`. Returns `None` if there is none.
    pub fn update_at<R>(&self, position: usize, f: impl FnOnce(&mut SettingItem) -> R) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let item = guard.get_mut(position)?;
        let result = f(item);
        self.mark_dirty();
        Some(result)
    }

    /// Mutate the item carrying `keyword`. Returns `None` if there is none.
    pub fn update_by_keyword<R>(&self, keyword: &str, f: impl FnOnce(&mut SettingItem) -> R) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let item = guard.iter_mut().find(|item| item.keyword() == keyword)?;
        let result = f(item);
        self.mark_dirty();
        Some(result)
    }

    /// Mutate the whole collection.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<SettingItem>) -> R) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let result = f(&mut guard);
        self.mark_dirty();
        Some(result)
    }

    /// Whether the collection changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}
