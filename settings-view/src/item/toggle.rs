//! Toggle switch item.

use super::{IconId, ItemHeader};
use crate::error::Result;

/// Text shown next to a checked switch when none is configured.
pub const DEFAULT_ON_TEXT: &str = "ON";
/// Text shown next to an unchecked switch when none is configured.
pub const DEFAULT_OFF_TEXT: &str = "OFF";

/// An item whose state is switched on and off.
///
/// # Example
///
/// ```
/// use settings_view::item::ToggleSwitch;
///
/// let wifi = ToggleSwitch::builder("wifi", "Wi-Fi")
///     .checked(true)
///     .text_on_true("Connected")
///     .build()
///     .unwrap();
/// assert_eq!(wifi.display_text(), "Connected");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSwitch {
    header: ItemHeader,
    checked: bool,
    text_on_true: String,
    text_on_false: String,
}

impl ToggleSwitch {
    /// Create an unchecked, enabled switch with default texts.
    pub fn new(keyword: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        Self::builder(keyword, title).build()
    }

    pub fn builder(keyword: impl Into<String>, title: impl Into<String>) -> ToggleSwitchBuilder {
        ToggleSwitchBuilder {
            keyword: keyword.into(),
            title: title.into(),
            icon: None,
            enabled: true,
            checked: false,
            text_on_true: DEFAULT_ON_TEXT.to_string(),
            text_on_false: DEFAULT_OFF_TEXT.to_string(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.header.keyword
    }

    pub fn title(&self) -> &str {
        &self.header.title
    }

    pub fn icon(&self) -> Option<IconId> {
        self.header.icon
    }

    pub fn is_enabled(&self) -> bool {
        self.header.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.header.enabled = enabled;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn text_on_true(&self) -> &str {
        &self.text_on_true
    }

    pub fn text_on_false(&self) -> &str {
        &self.text_on_false
    }

    /// Replace the checked text. Blank input is ignored.
    pub fn set_text_on_true(&mut self, text: impl Into<String>) {
        assign_unless_blank(&mut self.text_on_true, text.into());
    }

    /// Replace the unchecked text. Blank input is ignored.
    pub fn set_text_on_false(&mut self, text: impl Into<String>) {
        assign_unless_blank(&mut self.text_on_false, text.into());
    }

    /// The text matching the current checked state.
    pub fn display_text(&self) -> &str {
        if self.checked {
            &self.text_on_true
        } else {
            &self.text_on_false
        }
    }
}

fn assign_unless_blank(slot: &mut String, value: String) {
    if !value.trim().is_empty() {
        *slot = value;
    }
}

/// Builder for [`ToggleSwitch`].
#[derive(Debug, Clone)]
pub struct ToggleSwitchBuilder {
    keyword: String,
    title: String,
    icon: Option<IconId>,
    enabled: bool,
    checked: bool,
    text_on_true: String,
    text_on_false: String,
}

impl ToggleSwitchBuilder {
    pub fn icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Text shown when checked. Blank input keeps the default.
    pub fn text_on_true(mut self, text: impl Into<String>) -> Self {
        assign_unless_blank(&mut self.text_on_true, text.into());
        self
    }

    /// Text shown when unchecked. Blank input keeps the default.
    pub fn text_on_false(mut self, text: impl Into<String>) -> Self {
        assign_unless_blank(&mut self.text_on_false, text.into());
        self
    }

    pub fn build(self) -> Result<ToggleSwitch> {
        Ok(ToggleSwitch {
            header: ItemHeader::new(self.keyword, self.title, self.icon, self.enabled)?,
            checked: self.checked,
            text_on_true: self.text_on_true,
            text_on_false: self.text_on_false,
        })
    }
}
