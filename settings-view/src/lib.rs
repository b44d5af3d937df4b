pub mod adapter;
pub mod binder;
pub mod bundle;
pub mod config;
pub mod error;
pub mod host;
pub mod item;
pub mod mapper;
pub mod persist;
pub mod render;
pub mod row;
pub mod store;
pub mod view;

pub use adapter::SettingsAdapter;
pub use error::{BundleError, Result, SettingsError};
pub use view::SettingsView;

pub mod prelude {
    pub use crate::adapter::{CheckedChangeListener, ItemClickListener, SettingsAdapter, ValueChangeListener};
    pub use crate::binder::{ViewType, apply_enabled};
    pub use crate::bundle::{BundleBackend, MemoryBundle, StateBundle};
    pub use crate::config::SettingsConfig;
    pub use crate::error::{BundleError, SettingsError};
    pub use crate::host::{Capability, ChooserRequest, HostBridge, HostServices, RequestToken};
    pub use crate::item::{
        IconId, NumericalSelector, ResourceUri, SelectorMode, SettingItem, SpinnerChoice, StorageFileSelect,
        ToggleSwitch,
    };
    pub use crate::mapper::BarMapping;
    pub use crate::persist::{SavedItem, ScrollPosition};
    pub use crate::render::render_row;
    pub use crate::row::{BarControl, RowControl, RowView};
    pub use crate::view::SettingsView;
}
