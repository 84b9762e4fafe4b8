//! File type detection from extensions.

/// Broad category of an attachment, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Raster image (png, jpeg, gif, ...).
    Image,
    /// Scalable vector graphic.
    Svg,
    /// Video file.
    Video,
    /// Audio file.
    Audio,
    /// PDF document.
    Pdf,
    /// Anything else.
    Other,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "gif", "bmp", "png", "tiff", "tif", "psd", "webp", "heic", "avif",
];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "webm", "mkv", "wmv", "mpg", "mov", "flv"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "wma", "m4a", "flac", "aac", "ogg", "m4r"];

impl FileType {
    /// Classifies an extension (with or without leading dot, any case).
    #[must_use]
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Self::Svg,
            "pdf" => Self::Pdf,
            e if IMAGE_EXTENSIONS.contains(&e) => Self::Image,
            e if VIDEO_EXTENSIONS.contains(&e) => Self::Video,
            e if AUDIO_EXTENSIONS.contains(&e) => Self::Audio,
            _ => Self::Other,
        }
    }
}
