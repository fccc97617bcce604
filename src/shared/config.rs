//! Presentation settings for the input bar
//!
//! Every key is optional; missing keys take the values in `constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    ATTACHMENT_TOOLTIP, AVATAR_SIZE, FOCUS_DELAY_MS, INPUT_FONT_SIZE_PX,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_config_error, log_config_loaded};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBarConfig {
    pub avatar_size: u32,
    pub font_size_px: u32,
    pub focus_delay_ms: u64,
    pub attachment_tooltip: String,
    /// Disable to never move focus into the field automatically
    pub auto_focus: bool,
}

impl Default for InputBarConfig {
    fn default() -> Self {
        Self {
            avatar_size: AVATAR_SIZE,
            font_size_px: INPUT_FONT_SIZE_PX,
            focus_delay_ms: FOCUS_DELAY_MS,
            attachment_tooltip: ATTACHMENT_TOOLTIP.to_string(),
            auto_focus: true,
        }
    }
}

impl InputBarConfig {
    /// Parse from JSON. Blank input gives the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Load from the file named by `env_var`, falling back to defaults
    pub fn load_from_env(env_var: &str) -> Self {
        let Ok(path) = std::env::var(env_var) else {
            return Self::default();
        };

        match Self::load_from_path(Path::new(&path)) {
            Ok(config) => {
                log_config_loaded(&path);
                config
            }
            Err(e) => {
                log_config_error(&path, &e.to_string());
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.avatar_size == 0 {
            return Err(AppError::InvalidConfig("avatar_size must be > 0".to_string()));
        }
        if self.font_size_px == 0 {
            return Err(AppError::InvalidConfig("font_size_px must be > 0".to_string()));
        }
        Ok(())
    }
}
