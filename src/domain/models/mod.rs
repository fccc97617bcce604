// Domain models for the mini window input bar
// Pure Rust, no framework dependencies

pub mod assistant;
pub mod file;
pub mod draft;

pub use assistant::{Assistant, ModelDescriptor};
pub use file::{has_attachment, FileMetadata, FileType, SUPPORTED_IMAGE_TYPES};
pub use draft::MessageDraft;
