pub mod errors;
pub mod constants;
pub mod config;
pub mod logging;

// Dioxus hooks (web and native)
pub mod hooks;
