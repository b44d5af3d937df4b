//! Spinner choice item.

use super::{IconId, ItemHeader};
use crate::error::{Result, SettingsError};

/// An item that picks one entry out of a list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerChoice {
    header: ItemHeader,
    options: Vec<String>,
    select: usize,
    /// Set once the user has made a selection. Never restored.
    focusable: bool,
}

impl SpinnerChoice {
    pub fn builder(keyword: impl Into<String>, title: impl Into<String>) -> SpinnerChoiceBuilder {
        SpinnerChoiceBuilder {
            keyword: keyword.into(),
            title: title.into(),
            icon: None,
            enabled: true,
            options: Vec::new(),
            select: 0,
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

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the selected option.
    pub fn select(&self) -> usize {
        self.select
    }

    /// The selected option's label.
    pub fn selected_option(&self) -> &str {
        &self.options[self.select]
    }

    /// Change the selection.
    pub fn set_select(&mut self, index: usize) -> Result<()> {
        if index >= self.options.len() {
            return Err(self.select_error(index as i64));
        }
        self.select = index;
        Ok(())
    }

    /// Whether the user has interacted with this spinner yet.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub(crate) fn mark_focusable(&mut self) {
        self.focusable = true;
    }

    fn select_error(&self, index: i64) -> SettingsError {
        select_out_of_range(index, self.options.len())
    }
}

fn select_out_of_range(index: i64, len: usize) -> SettingsError {
    SettingsError::out_of_range("select", index, format!("0..{len}"))
}

/// Builder for [`SpinnerChoice`].
#[derive(Debug, Clone)]
pub struct SpinnerChoiceBuilder {
    keyword: String,
    title: String,
    icon: Option<IconId>,
    enabled: bool,
    options: Vec<String>,
    select: isize,
}

impl SpinnerChoiceBuilder {
    pub fn icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Initially selected index. Negative values are rejected by `build()`.
    pub fn select(mut self, index: isize) -> Self {
        self.select = index;
        self
    }

    pub fn build(self) -> Result<SpinnerChoice> {
        let header = ItemHeader::new(self.keyword, self.title, self.icon, self.enabled)?;
        if self.options.is_empty() {
            return Err(SettingsError::invalid("options"));
        }
        let select = usize::try_from(self.select)
            .ok()
            .filter(|index| *index < self.options.len())
            .ok_or_else(|| select_out_of_range(self.select as i64, self.options.len()))?;

        Ok(SpinnerChoice {
            header,
            options: self.options,
            select,
            focusable: false,
        })
    }
}
