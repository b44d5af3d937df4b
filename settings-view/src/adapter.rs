//! The list controller behind a settings view.

use std::fmt;
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::binder::{self, ViewType};
use crate::config::SettingsConfig;
use crate::error::{Result, SettingsError};
use crate::host::{HostBridge, HostServices};
use crate::item::{SettingItem, ensure_unique_keywords};
use crate::row::RowView;
use crate::store::ItemStore;

/// Called with `(position, checked)` after the user flips a toggle.
pub type CheckedChangeListener = Arc<dyn Fn(usize, bool) + Send + Sync>;
/// Called with the final value when the user releases a numeric selector's bar.
pub type ValueChangeListener = Arc<dyn Fn(&SettingsAdapter, i32) + Send + Sync>;
/// Called with `(row, position)` after any row is clicked.
pub type ItemClickListener = Arc<dyn Fn(&RowView, usize) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    checked_change: Option<CheckedChangeListener>,
    value_change: Option<ValueChangeListener>,
    item_click: Option<ItemClickListener>,
}

/// Owns the items of a settings list and binds them onto host rows.
///
/// The host asks for [`item_count`](Self::item_count) and
/// [`view_type_for`](Self::view_type_for), creates or recycles a [`RowView`]
/// of that type, and calls [`bind`](Self::bind). Gestures on the row then
/// write straight into the adapter's items.
///
/// Cloning is cheap: clones share items, listeners and host requests.
///
/// # Example
///
/// ```
/// use settings_view::prelude::*;
///
/// let adapter = SettingsAdapter::new(vec![
///     ToggleSwitch::new("wifi", "Wi-Fi").unwrap().into(),
/// ])
/// .unwrap();
///
/// let mut row = adapter.create_row(adapter.view_type_for(0).unwrap());
/// adapter.bind(0, &mut row).unwrap();
/// row.click();
/// assert_eq!(row.text(), "ON");
/// ```
#[derive(Clone)]
pub struct SettingsAdapter {
    store: ItemStore,
    listeners: Arc<RwLock<Listeners>>,
    config: Arc<SettingsConfig>,
    bridge: HostBridge,
}

impl SettingsAdapter {
    /// Create an adapter with the default configuration.
    ///
    /// Fails with [`SettingsError::DuplicateIdentifier`] if two items share a keyword.
    pub fn new(items: Vec<SettingItem>) -> Result<Self> {
        Self::with_config(items, SettingsConfig::default())
    }

    pub fn with_config(items: Vec<SettingItem>, config: SettingsConfig) -> Result<Self> {
        ensure_unique_keywords(&items)?;
        debug!("Created settings adapter with {} item(s)", items.len());
        Ok(Self {
            store: ItemStore::new(items),
            listeners: Arc::new(RwLock::new(Listeners::default())),
            config: Arc::new(config),
            bridge: HostBridge::new(),
        })
    }

    pub fn config(&self) -> &SettingsConfig {
        &self.config
    }

    /// The shared item store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn bridge(&self) -> &HostBridge {
        &self.bridge
    }

    /// Register the host that answers capability and chooser requests.
    pub fn register_host(&self, host: Arc<dyn HostServices>) {
        self.bridge.register(host);
    }

    // -------------------------------------------------------------------------
    // Host-facing queries
    // -------------------------------------------------------------------------

    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    /// Row layout for the item at `position`.
    pub fn view_type_for(&self, position: usize) -> Option<ViewType> {
        self.store
            .read(|items| items.get(position).map(SettingItem::view_type))
    }

    /// A blank row ready to be bound to items of `view_type`.
    pub fn create_row(&self, view_type: ViewType) -> RowView {
        RowView::new(view_type)
    }

    /// Display the item at `position` on `row`, replacing whatever the row
    /// showed before and registering fresh gesture handlers.
    pub fn bind(&self, position: usize, row: &mut RowView) -> Result<()> {
        let item = self.store.get(position).ok_or_else(|| {
            SettingsError::out_of_range("position", position as i64, format!("0..{}", self.item_count()))
        })?;
        let expected = item.view_type();
        if row.view_type() != expected {
            return Err(SettingsError::ViewTypeMismatch {
                expected,
                found: row.view_type(),
            });
        }
        trace!("Binding '{}' at position {}", item.keyword(), position);
        binder::bind_item(self, position, &item, row);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Copy of every item, in display order.
    pub fn items(&self) -> Vec<SettingItem> {
        self.store.snapshot()
    }

    pub fn item(&self, position: usize) -> Option<SettingItem> {
        self.store.get(position)
    }

    pub fn position_of(&self, keyword: &str) -> Option<usize> {
        self.store.position_of(keyword)
    }

    /// Mutate the item at `position` and mark the list changed.
    pub fn update_item<R>(&self, position: usize, f: impl FnOnce(&mut SettingItem) -> R) -> Option<R> {
        self.store.update_at(position, f)
    }

    /// Mutate the item carrying `keyword` and mark the list changed.
    pub fn update_item_by_keyword<R>(&self, keyword: &str, f: impl FnOnce(&mut SettingItem) -> R) -> Option<R> {
        self.store.update_by_keyword(keyword, f)
    }

    /// Append an item, rejecting a keyword that is already taken.
    pub fn push(&self, item: impl Into<SettingItem>) -> Result<()> {
        let item = item.into();
        if self.store.position_of(item.keyword()).is_some() {
            return Err(SettingsError::DuplicateIdentifier(item.keyword().to_string()));
        }
        self.store.update(|items| items.push(item));
        Ok(())
    }

    /// Remove the item carrying `keyword`.
    pub fn remove(&self, keyword: &str) -> Option<SettingItem> {
        let position = self.store.position_of(keyword)?;
        self.store.update(|items| items.remove(position))
    }

    // -------------------------------------------------------------------------
    // Change notification
    // -------------------------------------------------------------------------

    /// Whether any item changed since the host last redrew.
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.store.clear_dirty();
    }

    /// Force the host to rebind every visible row.
    pub fn notify_data_set_changed(&self) {
        self.store.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn set_on_checked_change<F>(&self, listener: F)
    where
        F: Fn(usize, bool) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.listeners.write() {
            guard.checked_change = Some(Arc::new(listener));
        }
    }

    pub fn set_on_value_change<F>(&self, listener: F)
    where
        F: Fn(&SettingsAdapter, i32) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.listeners.write() {
            guard.value_change = Some(Arc::new(listener));
        }
    }

    pub fn set_on_item_click<F>(&self, listener: F)
    where
        F: Fn(&RowView, usize) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.listeners.write() {
            guard.item_click = Some(Arc::new(listener));
        }
    }

    /// Drop every registered listener.
    pub fn clear_listeners(&self) {
        if let Ok(mut guard) = self.listeners.write() {
            *guard = Listeners::default();
        }
    }

    // Listeners are cloned out so the lock is not held while they run.

    pub(crate) fn notify_checked_change(&self, position: usize, checked: bool) {
        let listener = self
            .listeners
            .read()
            .ok()
            .and_then(|guard| guard.checked_change.clone());
        if let Some(listener) = listener {
            listener(position, checked);
        }
    }

    pub(crate) fn notify_value_change(&self, value: i32) {
        let listener = self
            .listeners
            .read()
            .ok()
            .and_then(|guard| guard.value_change.clone());
        if let Some(listener) = listener {
            listener(self, value);
        }
    }

    pub(crate) fn notify_item_click(&self, row: &RowView, position: usize) {
        let listener = self
            .listeners
            .read()
            .ok()
            .and_then(|guard| guard.item_click.clone());
        if let Some(listener) = listener {
            listener(row, position);
        }
    }
}

impl fmt::Debug for SettingsAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsAdapter")
            .field("items", &self.item_count())
            .field("config", &self.config)
            .field("bridge", &self.bridge)
            .finish()
    }
}
