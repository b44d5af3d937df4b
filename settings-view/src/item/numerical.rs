//! Numeric selector item, displayed with a bar.

use super::{IconId, ItemHeader};
use crate::error::{Result, SettingsError};

/// How a [`NumericalSelector`] interprets its value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMode {
    /// Values come from an explicit list.
    Discrete,
    /// Values run from `min` to `max` in steps of `divine`.
    Stepped,
    /// Every integer from `min` to `max`.
    Plain,
}

/// An item that picks an integer with a bar.
///
/// The domain is either a continuous range (`min..=max`, optionally
/// quantized by `divine`) or an explicit list of values. A non-empty list
/// always wins over the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericalSelector {
    header: ItemHeader,
    state: i32,
    max: i32,
    min: i32,
    divine: i32,
    unit: String,
    params: Vec<i32>,
}

impl NumericalSelector {
    pub fn builder(keyword: impl Into<String>, title: impl Into<String>) -> NumericalSelectorBuilder {
        NumericalSelectorBuilder {
            keyword: keyword.into(),
            title: title.into(),
            icon: None,
            enabled: true,
            state: 0,
            max: 100,
            min: 0,
            divine: 1,
            unit: String::new(),
            params: Vec::new(),
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

    /// Current semantic value.
    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn divine(&self) -> i32 {
        self.divine
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Explicit value list. Empty unless the selector is discrete.
    pub fn params(&self) -> &[i32] {
        &self.params
    }

    pub fn mode(&self) -> SelectorMode {
        if !self.params.is_empty() {
            SelectorMode::Discrete
        } else if self.divine > 1 {
            SelectorMode::Stepped
        } else {
            SelectorMode::Plain
        }
    }

    /// Set the value, checked against the selector's domain.
    pub fn set_state(&mut self, value: i32) -> Result<()> {
        check_domain(value, self.min, self.max, &self.params)?;
        self.state = value;
        Ok(())
    }

    /// The value followed by its unit, e.g. `"60px"`.
    pub fn display_text(&self) -> String {
        format!("{}{}", self.state, self.unit)
    }
}

fn check_domain(value: i32, min: i32, max: i32, params: &[i32]) -> Result<()> {
    if params.is_empty() {
        if value < min || value > max {
            return Err(SettingsError::out_of_range("state", value, format!("{min}..={max}")));
        }
    } else if !params.contains(&value) {
        return Err(SettingsError::out_of_range("state", value, format!("{params:?}")));
    }
    Ok(())
}

/// The bar spans `max - min`, which must fit in an `i32`.
fn check_range(min: i32, max: i32) -> Result<()> {
    if max < min {
        return Err(SettingsError::out_of_range("max", max, format!("{min}..")));
    }
    if max.checked_sub(min).is_none() {
        let limit = i64::from(min) + i64::from(i32::MAX);
        return Err(SettingsError::out_of_range("max", max, format!("{min}..={limit}")));
    }
    Ok(())
}

/// Every listed value needs its own bar position.
fn check_distinct(params: &[i32]) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(params.len());
    for value in params {
        if !seen.insert(*value) {
            return Err(SettingsError::out_of_range("params", *value, "distinct values"));
        }
    }
    Ok(())
}

/// Builder for [`NumericalSelector`].
///
/// Defaults: `state` 0, `min` 0, `max` 100, `divine` 1, no unit, no value list.
#[derive(Debug, Clone)]
pub struct NumericalSelectorBuilder {
    keyword: String,
    title: String,
    icon: Option<IconId>,
    enabled: bool,
    state: i32,
    max: i32,
    min: i32,
    divine: i32,
    unit: String,
    params: Vec<i32>,
}

impl NumericalSelectorBuilder {
    pub fn icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn state(mut self, state: i32) -> Self {
        self.state = state;
        self
    }

    /// Continuous range of the selector.
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn min(mut self, min: i32) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    /// Step width. Values above 1 quantize the range.
    pub fn divine(mut self, divine: i32) -> Self {
        self.divine = divine;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Restrict the selector to an explicit list of values.
    pub fn params(mut self, params: impl IntoIterator<Item = i32>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<NumericalSelector> {
        let header = ItemHeader::new(self.keyword, self.title, self.icon, self.enabled)?;
        if self.divine < 1 {
            return Err(SettingsError::out_of_range("divine", self.divine, "1.."));
        }
        if self.params.is_empty() {
            check_range(self.min, self.max)?;
        } else {
            check_distinct(&self.params)?;
        }
        check_domain(self.state, self.min, self.max, &self.params)?;

        Ok(NumericalSelector {
            header,
            state: self.state,
            max: self.max,
            min: self.min,
            divine: self.divine,
            unit: self.unit,
            params: self.params,
        })
    }
}
