//! File URL construction.

use crate::file::{FileDescriptor, FileId};
use crate::{Error, Result};

/// Builds file download and preview URLs against a chat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUrls {
    base: String,
}

impl FileUrls {
    /// Creates a builder for the given server base URL.
    ///
    /// Trailing slashes are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidServerUrl`] if the URL is empty or does not
    /// use the `http` or `https` scheme.
    pub fn new(server_url: &str) -> Result<Self> {
        let trimmed = server_url.trim().trim_end_matches('/');
        let has_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|host| !host.is_empty());

        if !has_scheme {
            return Err(Error::InvalidServerUrl(server_url.to_string()));
        }

        Ok(Self {
            base: trimmed.to_string(),
        })
    }

    /// Server base URL without trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of the original, full-resolution file.
    #[must_use]
    pub fn file_url(&self, id: &FileId) -> String {
        format!("{}/api/v4/files/{}", self.base, id)
    }

    /// URL of the preview-resolution asset.
    #[must_use]
    pub fn preview_url(&self, id: &FileId) -> String {
        format!("{}/preview", self.file_url(id))
    }

    /// URL to display inline: the preview if one exists, else the original.
    #[must_use]
    pub fn source_url(&self, file: &FileDescriptor) -> String {
        if file.has_preview_image {
            self.preview_url(&file.id)
        } else {
            self.file_url(&file.id)
        }
    }
}
