//! Adapter configuration types.

use crate::host::Capability;

/// Host-dependent behaviour of a settings list.
///
/// Shared by every row bound by one adapter.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    /// Whether the host's bar widget supports a lower bound other than zero.
    /// When false, plain-range bars are shifted to start at zero.
    pub adjustable_bar_min: bool,

    /// Opacity applied to every part of a disabled row.
    pub disabled_alpha: f32,

    /// Capability requested before the file chooser is opened.
    pub storage_capability: Capability,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            adjustable_bar_min: true,
            disabled_alpha: 0.5,
            storage_capability: Capability::read_storage(),
        }
    }
}

impl SettingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare whether the host bar supports a non-zero lower bound.
    pub fn adjustable_bar_min(mut self, supported: bool) -> Self {
        self.adjustable_bar_min = supported;
        self
    }

    /// Set the opacity of disabled rows, clamped to `0.0..=1.0`.
    pub fn disabled_alpha(mut self, alpha: f32) -> Self {
        self.disabled_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn storage_capability(mut self, capability: Capability) -> Self {
        self.storage_capability = capability;
        self
    }
}
