//! Structured logging for the input bar
//!
//! Uses tracing with an `operation` field on every event so the
//! launcher's subscriber can filter per concern.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    FocusRequest,
    AttachmentRequest,
    Render,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::FocusRequest => "focus_request",
            LogOperation::AttachmentRequest => "attachment_request",
            LogOperation::Render => "render",
            LogOperation::Config => "config",
        }
    }
}

/// Log a deferred focus request entering its timer slot
pub fn log_focus_scheduled(slot: &str, delay_ms: u64) {
    tracing::debug!(
        operation = LogOperation::FocusRequest.as_str(),
        slot = slot,
        delay_ms = delay_ms,
        "Scheduled deferred focus"
    );
}

pub fn log_focus_applied() {
    tracing::trace!(
        operation = LogOperation::FocusRequest.as_str(),
        "Focus moved into text field"
    );
}

/// Focus is best-effort, so failures are only logged
pub fn log_focus_failed(reason: &str) {
    tracing::debug!(
        operation = LogOperation::FocusRequest.as_str(),
        reason = reason,
        "Deferred focus not applied"
    );
}

pub fn log_attachment_request(attached: usize) {
    tracing::debug!(
        operation = LogOperation::AttachmentRequest.as_str(),
        attached_files = attached,
        "Attachment picker requested"
    );
}

pub fn log_attachment_blocked() {
    tracing::trace!(
        operation = LogOperation::AttachmentRequest.as_str(),
        "Attachment button ignored while loading"
    );
}

pub fn log_render(loading: bool, has_attachment: bool, has_avatar: bool) {
    tracing::trace!(
        operation = LogOperation::Render.as_str(),
        loading = loading,
        has_attachment = has_attachment,
        has_avatar = has_avatar,
        "Rendering input bar"
    );
}

pub fn log_config_loaded(path: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        path = path,
        "Input bar config loaded"
    );
}

pub fn log_config_error(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        path = path,
        error = error,
        "Failed to load input bar config, using defaults"
    );
}
