use std::io;

use settings_view::{BundleError, SettingsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("state bundle error: {0}")]
    Bundle(#[from] BundleError),
}
