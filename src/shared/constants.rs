// Shared constants for the mini window input bar

/// Avatar edge length in pixels
pub const AVATAR_SIZE: u32 = 30;

/// Timer slot used for the deferred focus request
pub const FOCUS_TIMER_KEY: &str = "focus";

/// Delay before the deferred focus request fires
pub const FOCUS_DELAY_MS: u64 = 0;

pub const INPUT_FONT_SIZE_PX: u32 = 18;

pub const ATTACHMENT_TOOLTIP: &str = "Upload image attachment";

pub const INPUT_BAR_CONTAINER_ID: &str = "mini-input-bar";
pub const INPUT_BAR_FIELD_ID: &str = "mini-input-bar-field";

/// Environment variable holding the launcher's JSON config path
pub const CONFIG_PATH_ENV: &str = "MINI_INPUT_BAR_CONFIG";

/// How long the demo host keeps `loading` raised after a send
pub const SEND_SETTLE_MS: u64 = 600;
