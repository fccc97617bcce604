use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported image formats for the attachment picker
pub const SUPPORTED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "mkv", "avi"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "csv", "log", "rs", "toml", "yaml", "yml"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt"];

/// Broad category of an attached file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
    Audio,
    Text,
    Document,
    Other,
}

impl FileType {
    /// Classify by extension (leading dot optional, case-insensitive)
    pub fn from_ext(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        let ext = ext.as_str();
        if IMAGE_EXTENSIONS.contains(&ext) {
            FileType::Image
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            FileType::Video
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            FileType::Audio
        } else if TEXT_EXTENSIONS.contains(&ext) {
            FileType::Text
        } else if DOCUMENT_EXTENSIONS.contains(&ext) {
            FileType::Document
        } else {
            FileType::Other
        }
    }
}

/// Metadata of a file attached to the pending message.
/// Content is never held here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: String,
    pub name: String,
    pub origin_name: String,
    #[serde(default)]
    pub path: String,
    pub size: u64,
    pub ext: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl FileMetadata {
    /// Build metadata for a freshly selected file
    pub fn from_name(name: &str, size: u64) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();

        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            origin_name: name.to_string(),
            path: String::new(),
            size,
            file_type: FileType::from_ext(&ext),
            ext,
            created_at: Utc::now(),
            count: 1,
        }
    }

    pub fn is_image(&self) -> bool {
        self.file_type == FileType::Image
    }
}

/// Whether any file is attached to the pending message
pub fn has_attachment(files: &[FileMetadata]) -> bool {
    !files.is_empty()
}
