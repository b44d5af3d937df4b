//! Mapping between a numeric selector's value and its bar position.
//!
//! A bar exposes a linear integer range. A [`NumericalSelector`] may have a
//! quantized or list-backed domain, so every bind computes a [`BarMapping`]
//! that converts both ways. The row's text always reports the semantic value,
//! never the bar position.

use crate::config::SettingsConfig;
use crate::item::{NumericalSelector, SelectorMode};

/// Conversion rule between semantic values and bar positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarMapping {
    /// Bar position indexes into `values`.
    Discrete { values: Vec<i32> },
    /// Bar `0..=steps`, each step worth `divine`.
    Stepped { min: i32, divine: i32, steps: i32 },
    /// Bar range equals the value range.
    Plain { min: i32, max: i32 },
    /// Bar range shifted to start at zero, for hosts whose bar has no
    /// adjustable lower bound.
    Offset { min: i32, max: i32 },
}

impl BarMapping {
    /// Pick the mapping for a selector under the host's bar capabilities.
    pub fn for_selector(item: &NumericalSelector, config: &SettingsConfig) -> Self {
        match item.mode() {
            SelectorMode::Discrete => Self::Discrete {
                values: item.params().to_vec(),
            },
            SelectorMode::Stepped => Self::Stepped {
                min: item.min(),
                divine: item.divine(),
                steps: narrow(span(item.min(), item.max()) / i64::from(item.divine())),
            },
            SelectorMode::Plain if config.adjustable_bar_min => Self::Plain {
                min: item.min(),
                max: item.max(),
            },
            SelectorMode::Plain => Self::Offset {
                min: item.min(),
                max: item.max(),
            },
        }
    }

    /// Lowest bar position.
    pub fn bar_min(&self) -> i32 {
        match self {
            Self::Plain { min, .. } => *min,
            _ => 0,
        }
    }

    /// Highest bar position.
    pub fn bar_max(&self) -> i32 {
        match self {
            Self::Discrete { values } => values.len().saturating_sub(1) as i32,
            Self::Stepped { steps, .. } => *steps,
            Self::Plain { max, .. } => *max,
            Self::Offset { min, max } => narrow(span(*min, *max)),
        }
    }

    /// Bar position showing `value`.
    ///
    /// A value missing from a discrete list maps to position 0; values off
    /// either end of a range map to the nearest end of the bar.
    pub fn to_position(&self, value: i32) -> i32 {
        let position = match self {
            Self::Discrete { values } => values
                .iter()
                .position(|candidate| *candidate == value)
                .map_or(0, |index| index as i64),
            Self::Stepped { min, divine, .. } => span(*min, value).div_euclid(i64::from(*divine)),
            Self::Plain { .. } => i64::from(value),
            Self::Offset { min, .. } => span(*min, value),
        };
        self.clamp(narrow(position))
    }

    /// Semantic value at bar `position`, clamped to the bar range first.
    pub fn to_value(&self, position: i32) -> i32 {
        let position = self.clamp(position);
        match self {
            Self::Discrete { values } => values.get(position as usize).copied().unwrap_or_default(),
            Self::Stepped { min, divine, .. } => {
                narrow(i64::from(*min) + i64::from(position) * i64::from(*divine))
            }
            Self::Plain { .. } => position,
            Self::Offset { min, .. } => narrow(i64::from(*min) + i64::from(position)),
        }
    }

    /// Clamp a position into `bar_min()..=bar_max()`.
    pub fn clamp(&self, position: i32) -> i32 {
        position.clamp(self.bar_min(), self.bar_max().max(self.bar_min()))
    }
}

/// `to - from`, without overflow.
fn span(from: i32, to: i32) -> i64 {
    i64::from(to) - i64::from(from)
}

fn narrow(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
