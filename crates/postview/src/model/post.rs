//! Thread and post models.

use chrono::{DateTime, Local};
use postview_core::{FileDescriptor, FileId, PostId};
use serde::Deserialize;

/// Server-side metadata attached to a post once processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostMetadata {
    /// File infos for the post's attachments.
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

/// A message in the thread.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: PostId,
    /// Author display name.
    #[serde(default)]
    pub user: String,
    /// Message text.
    #[serde(default)]
    pub message: String,
    /// Creation time, milliseconds since the Unix epoch.
    #[serde(default)]
    pub create_at: i64,
    /// Attached file identifiers.
    #[serde(default)]
    pub file_ids: Vec<FileId>,
    /// File metadata; absent until the server has processed the upload.
    #[serde(default)]
    pub metadata: Option<PostMetadata>,
}

impl Post {
    /// Whether the post should host a single image view.
    ///
    /// True for a single attachment whose metadata is either still missing
    /// or describes an image.
    #[must_use]
    pub fn has_single_image(&self) -> bool {
        if self.file_ids.len() != 1 {
            return false;
        }
        self.metadata
            .as_ref()
            .and_then(|m| m.files.first())
            .is_none_or(FileDescriptor::is_image)
    }

    /// Metadata for the single attachment, if already known.
    #[must_use]
    pub fn file_info(&self) -> Option<&FileDescriptor> {
        let id = self.file_ids.first()?;
        self.metadata
            .as_ref()?
            .files
            .iter()
            .find(|file| &file.id == id)
    }

    /// Creation time formatted in local time.
    #[must_use]
    pub fn display_time(&self) -> String {
        DateTime::from_timestamp_millis(self.create_at).map_or_else(String::new, |dt| {
            dt.with_timezone(&Local).format("%a %H:%M").to_string()
        })
    }
}

/// Parses a thread from its JSON representation (an array of posts).
///
/// # Errors
///
/// Returns an error if the JSON is not a valid post array.
pub fn parse_thread(json: &str) -> postview_core::Result<Vec<Post>> {
    Ok(serde_json::from_str(json)?)
}
