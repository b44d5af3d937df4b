//! Configuration items shown by the settings list.
//!
//! The set of item kinds is closed: every row in a settings list is one of
//! the [`SettingItem`] variants. Each variant validates its keyword and title
//! when built, so an item that exists is always displayable.

mod file_select;
mod numerical;
mod spinner;
mod toggle;

pub use file_select::{FileChosenCallback, ResourceUri, StorageFileSelect, StorageFileSelectBuilder};
pub use numerical::{NumericalSelector, NumericalSelectorBuilder, SelectorMode};
pub use spinner::{SpinnerChoice, SpinnerChoiceBuilder};
pub use toggle::{DEFAULT_OFF_TEXT, DEFAULT_ON_TEXT, ToggleSwitch, ToggleSwitchBuilder};

use crate::binder::ViewType;
use crate::error::{Result, SettingsError};

/// Opaque handle to an icon supplied by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// One row of the settings list.
#[derive(Debug, Clone)]
pub enum SettingItem {
    Toggle(ToggleSwitch),
    Spinner(SpinnerChoice),
    Numerical(NumericalSelector),
    FileSelect(StorageFileSelect),
}

impl SettingItem {
    /// Unique identifier of the item within its collection.
    pub fn keyword(&self) -> &str {
        match self {
            Self::Toggle(item) => item.keyword(),
            Self::Spinner(item) => item.keyword(),
            Self::Numerical(item) => item.keyword(),
            Self::FileSelect(item) => item.keyword(),
        }
    }

    /// Title shown on the row.
    pub fn title(&self) -> &str {
        match self {
            Self::Toggle(item) => item.title(),
            Self::Spinner(item) => item.title(),
            Self::Numerical(item) => item.title(),
            Self::FileSelect(item) => item.title(),
        }
    }

    pub fn icon(&self) -> Option<IconId> {
        match self {
            Self::Toggle(item) => item.icon(),
            Self::Spinner(item) => item.icon(),
            Self::Numerical(item) => item.icon(),
            Self::FileSelect(item) => item.icon(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Toggle(item) => item.is_enabled(),
            Self::Spinner(item) => item.is_enabled(),
            Self::Numerical(item) => item.is_enabled(),
            Self::FileSelect(item) => item.is_enabled(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Self::Toggle(item) => item.set_enabled(enabled),
            Self::Spinner(item) => item.set_enabled(enabled),
            Self::Numerical(item) => item.set_enabled(enabled),
            Self::FileSelect(item) => item.set_enabled(enabled),
        }
    }

    /// The row layout this item is displayed with.
    pub fn view_type(&self) -> ViewType {
        match self {
            Self::Toggle(_) => ViewType::Switch,
            Self::Spinner(_) => ViewType::Spinner,
            Self::Numerical(_) => ViewType::SeekBar,
            Self::FileSelect(_) => ViewType::Normal,
        }
    }

    pub fn as_toggle(&self) -> Option<&ToggleSwitch> {
        match self {
            Self::Toggle(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_toggle_mut(&mut self) -> Option<&mut ToggleSwitch> {
        match self {
            Self::Toggle(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_spinner(&self) -> Option<&SpinnerChoice> {
        match self {
            Self::Spinner(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_spinner_mut(&mut self) -> Option<&mut SpinnerChoice> {
        match self {
            Self::Spinner(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_numerical(&self) -> Option<&NumericalSelector> {
        match self {
            Self::Numerical(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_numerical_mut(&mut self) -> Option<&mut NumericalSelector> {
        match self {
            Self::Numerical(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_file_select(&self) -> Option<&StorageFileSelect> {
        match self {
            Self::FileSelect(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_file_select_mut(&mut self) -> Option<&mut StorageFileSelect> {
        match self {
            Self::FileSelect(item) => Some(item),
            _ => None,
        }
    }
}

impl From<ToggleSwitch> for SettingItem {
    fn from(item: ToggleSwitch) -> Self {
        Self::Toggle(item)
    }
}

impl From<SpinnerChoice> for SettingItem {
    fn from(item: SpinnerChoice) -> Self {
        Self::Spinner(item)
    }
}

impl From<NumericalSelector> for SettingItem {
    fn from(item: NumericalSelector) -> Self {
        Self::Numerical(item)
    }
}

impl From<StorageFileSelect> for SettingItem {
    fn from(item: StorageFileSelect) -> Self {
        Self::FileSelect(item)
    }
}

/// Fields shared by every item kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemHeader {
    pub keyword: String,
    pub title: String,
    pub icon: Option<IconId>,
    pub enabled: bool,
}

impl ItemHeader {
    /// Validates keyword and title. Blank strings count as empty.
    pub fn new(keyword: String, title: String, icon: Option<IconId>, enabled: bool) -> Result<Self> {
        require_text("keyword", &keyword)?;
        require_text("title", &title)?;
        Ok(Self {
            keyword,
            title,
            icon,
            enabled,
        })
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SettingsError::invalid(field));
    }
    Ok(())
}

/// Checks that no two items share a keyword, returning the first repeated one.
pub(crate) fn ensure_unique_keywords(items: &[SettingItem]) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.keyword()) {
            return Err(SettingsError::DuplicateIdentifier(item.keyword().to_string()));
        }
    }
    Ok(())
}
