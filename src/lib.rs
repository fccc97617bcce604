// Public API exports
pub mod domain;
pub mod shared;

// Dioxus components and the mini window page
pub mod app;

pub use app::components::{InputBar, InputBarProps};
pub use shared::config::InputBarConfig;
