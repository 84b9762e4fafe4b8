//! File attachment metadata.

mod kind;

pub use kind::FileType;

use serde::{Deserialize, Serialize};

/// Unique identifier for an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub String);

impl FileId {
    /// Creates a file identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of the post (message) an attachment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// Creates a post identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata describing an image attachment, as supplied by the server.
///
/// Width and height are the natural pixel dimensions. They are zero while
/// the server has not extracted them yet, and may be filled in by a later
/// metadata update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File identifier.
    pub id: FileId,
    /// Display name, including extension.
    pub name: String,
    /// Lowercase extension without the dot.
    #[serde(default)]
    pub extension: String,
    /// Natural width in pixels.
    #[serde(default)]
    pub width: i32,
    /// Natural height in pixels.
    #[serde(default)]
    pub height: i32,
    /// Whether a separate preview-resolution asset exists.
    #[serde(default)]
    pub has_preview_image: bool,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// MIME type reported by the server.
    #[serde(default)]
    pub mime_type: String,
}

impl FileDescriptor {
    /// Creates a descriptor with no preview asset.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        extension: impl Into<String>,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            id: FileId::new(id),
            name: name.into(),
            extension: extension.into(),
            width,
            height,
            has_preview_image: false,
            size: 0,
            mime_type: String::new(),
        }
    }

    /// Sets whether a preview-resolution asset exists.
    #[must_use]
    pub fn with_preview_image(mut self, has_preview_image: bool) -> Self {
        self.has_preview_image = has_preview_image;
        self
    }

    /// Parses a descriptor from the server's JSON file-info record.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or lacks `id`/`name`.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// File type derived from the extension.
    #[must_use]
    pub fn file_type(&self) -> FileType {
        FileType::from_extension(&self.extension)
    }

    /// Whether this attachment is rendered as an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self.file_type(), FileType::Image | FileType::Svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_file_info() {
        let json = r#"{
            "id": "abc123",
            "post_id": "p1",
            "name": "diagram.svg",
            "extension": "svg",
            "size": 2048,
            "mime_type": "image/svg+xml",
            "width": 0,
            "height": 0,
            "has_preview_image": false
        }"#;

        let file = FileDescriptor::from_json(json).unwrap();
        assert_eq!(file.id.as_str(), "abc123");
        assert_eq!(file.file_type(), FileType::Svg);
        assert_eq!(file.size, 2048);
        assert!(file.is_image());
    }

    #[test]
    fn missing_dimensions_default_to_zero() {
        let file = FileDescriptor::from_json(r#"{"id":"x","name":"a.png"}"#).unwrap();
        assert_eq!((file.width, file.height), (0, 0));
        assert!(!file.has_preview_image);
    }

    #[test]
    fn rejects_record_without_id() {
        assert!(FileDescriptor::from_json(r#"{"name":"a.png"}"#).is_err());
    }

    #[test]
    fn non_image_extension() {
        let file = FileDescriptor::new("f", "notes.pdf", "pdf", 0, 0);
        assert!(!file.is_image());
    }
}
