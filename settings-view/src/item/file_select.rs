//! File selection item.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{IconId, ItemHeader};
use crate::error::Result;

/// Opaque locator of a resource picked through the host's file chooser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceUri(String);

impl ResourceUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text shown for this resource on a row.
    ///
    /// With `full_path` the whole locator is shown, otherwise only the last
    /// non-empty path segment.
    pub fn display_name(&self, full_path: bool) -> &str {
        if full_path {
            return &self.0;
        }
        self.0
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceUri {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for ResourceUri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

/// Called with the locator the user picked for a [`StorageFileSelect`].
pub type FileChosenCallback = Arc<dyn Fn(&ResourceUri) + Send + Sync>;

/// An item that lets the user pick a file from storage.
///
/// Clicking the row asks the host for storage access and then opens the
/// host's chooser filtered by `mime_type`.
#[derive(Clone)]
pub struct StorageFileSelect {
    header: ItemHeader,
    uri: Option<ResourceUri>,
    mime_type: String,
    display_full_path: bool,
    on_file_chosen: Option<FileChosenCallback>,
}

impl StorageFileSelect {
    pub fn new(keyword: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        Self::builder(keyword, title).build()
    }

    pub fn builder(keyword: impl Into<String>, title: impl Into<String>) -> StorageFileSelectBuilder {
        StorageFileSelectBuilder {
            keyword: keyword.into(),
            title: title.into(),
            icon: None,
            enabled: true,
            uri: None,
            mime_type: "*/*".to_string(),
            display_full_path: false,
            on_file_chosen: None,
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

    pub fn uri(&self) -> Option<&ResourceUri> {
        self.uri.as_ref()
    }

    pub fn set_uri(&mut self, uri: Option<ResourceUri>) {
        self.uri = uri;
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn displays_full_path(&self) -> bool {
        self.display_full_path
    }

    /// Text shown on the row: the chosen file, or nothing.
    pub fn display_text(&self) -> &str {
        self.uri
            .as_ref()
            .map(|uri| uri.display_name(self.display_full_path))
            .unwrap_or("")
    }

    pub(crate) fn on_file_chosen(&self) -> Option<FileChosenCallback> {
        self.on_file_chosen.clone()
    }
}

impl fmt::Debug for StorageFileSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageFileSelect")
            .field("header", &self.header)
            .field("uri", &self.uri)
            .field("mime_type", &self.mime_type)
            .field("display_full_path", &self.display_full_path)
            .field("on_file_chosen", &self.on_file_chosen.is_some())
            .finish()
    }
}

/// Builder for [`StorageFileSelect`].
pub struct StorageFileSelectBuilder {
    keyword: String,
    title: String,
    icon: Option<IconId>,
    enabled: bool,
    uri: Option<ResourceUri>,
    mime_type: String,
    display_full_path: bool,
    on_file_chosen: Option<FileChosenCallback>,
}

impl StorageFileSelectBuilder {
    pub fn icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn uri(mut self, uri: impl Into<ResourceUri>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Mime filter passed to the chooser. Defaults to `*/*`.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn display_full_path(mut self, full: bool) -> Self {
        self.display_full_path = full;
        self
    }

    /// Callback invoked after the user picked a file.
    pub fn on_file_chosen<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ResourceUri) + Send + Sync + 'static,
    {
        self.on_file_chosen = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> Result<StorageFileSelect> {
        Ok(StorageFileSelect {
            header: ItemHeader::new(self.keyword, self.title, self.icon, self.enabled)?,
            uri: self.uri,
            mime_type: self.mime_type,
            display_full_path: self.display_full_path,
            on_file_chosen: self.on_file_chosen,
        })
    }
}
