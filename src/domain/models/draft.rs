use serde::{Deserialize, Serialize};

use super::file::FileMetadata;

/// Message being composed in the mini window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageDraft {
    pub text: String,
    #[serde(default)]
    pub files: Vec<FileMetadata>,
}

impl MessageDraft {
    pub fn new(text: impl Into<String>, files: Vec<FileMetadata>) -> Self {
        Self {
            text: text.into(),
            files,
        }
    }

    /// Sendable when there is non-blank text OR at least one attachment
    pub fn is_sendable(&self) -> bool {
        !self.text.trim().is_empty() || !self.files.is_empty()
    }

    /// Move the composer's contents into a draft, leaving both empty.
    /// Nothing is taken when the result would not be sendable.
    pub fn take_from(text: &mut String, files: &mut Vec<FileMetadata>) -> Option<Self> {
        if text.trim().is_empty() && files.is_empty() {
            return None;
        }
        Some(Self::new(std::mem::take(text), std::mem::take(files)))
    }
}
