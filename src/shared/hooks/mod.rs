// Custom Dioxus hooks
pub mod use_timer;
pub mod use_focus;
pub mod use_auto_focus;

pub use use_timer::{use_timer, sleep_ms, TimerSlots, UseTimer};
pub use use_focus::{use_focus_handle, FocusHandle};
pub use use_auto_focus::{use_auto_focus, AutoFocusGate};
