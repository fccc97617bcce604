use dioxus::prelude::*;

use crate::shared::logging::{log_attachment_blocked, log_attachment_request};

/// Colours and cursor for one attachment button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPresentation {
    pub background: &'static str,
    pub foreground: &'static str,
    pub cursor: &'static str,
}

impl ButtonPresentation {
    /// Map the (active, disabled) flags to their presentation.
    /// Active keeps its background when disabled; disabled owns colour and cursor.
    pub fn from_flags(active: bool, disabled: bool) -> Self {
        match (active, disabled) {
            (false, false) => Self {
                background: "transparent",
                foreground: "inherit",
                cursor: "pointer",
            },
            (true, false) => Self {
                background: "var(--color-primary-100)",
                foreground: "var(--color-primary)",
                cursor: "pointer",
            },
            (false, true) => Self {
                background: "transparent",
                foreground: "var(--color-text-3)",
                cursor: "not-allowed",
            },
            (true, true) => Self {
                background: "var(--color-primary-100)",
                foreground: "var(--color-text-3)",
                cursor: "not-allowed",
            },
        }
    }

    /// Inline custom properties read by `.mini-input-bar__attach`.
    /// Plain `background`/`color` here would shadow the stylesheet's `:hover`.
    pub fn style(&self) -> String {
        format!(
            "--attach-bg: {}; --attach-fg: {}; --attach-cursor: {};",
            self.background, self.foreground, self.cursor
        )
    }
}

pub fn button_class(active: bool, disabled: bool) -> String {
    let mut class = String::from("mini-input-bar__attach");
    if active {
        class.push_str(" mini-input-bar__attach--active");
    }
    if disabled {
        class.push_str(" mini-input-bar__attach--disabled");
    }
    class
}

/// Invoke `select` unless the button is disabled. Returns whether it ran.
pub fn dispatch_select(disabled: bool, select: impl FnOnce()) -> bool {
    if disabled {
        return false;
    }
    select();
    true
}

/// Button asking the caller to pick image attachments
#[component]
pub fn AttachmentButton(
    active: bool,
    disabled: bool,
    tooltip: String,
    #[props(default)] attached: usize,
    on_select: EventHandler<()>,
) -> Element {
    let presentation = ButtonPresentation::from_flags(active, disabled);
    let class = button_class(active, disabled);

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            style: "{presentation.style()}",
            title: "{tooltip}",
            aria_label: "{tooltip}",
            aria_pressed: active,
            disabled: disabled,
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if dispatch_select(disabled, || on_select.call(())) {
                    log_attachment_request(attached);
                } else {
                    log_attachment_blocked();
                }
            },
            span { class: "btn__icon", "🖼️" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let p = ButtonPresentation::from_flags(false, false);
        assert_eq!(p.background, "transparent");
        assert_eq!(p.foreground, "inherit");
        assert_eq!(p.cursor, "pointer");
    }

    #[test]
    fn test_active_state_highlights() {
        let p = ButtonPresentation::from_flags(true, false);
        assert_eq!(p.background, "var(--color-primary-100)");
        assert_eq!(p.foreground, "var(--color-primary)");
    }

    #[test]
    fn test_disabled_overrides_interaction() {
        for active in [false, true] {
            let p = ButtonPresentation::from_flags(active, true);
            assert_eq!(p.cursor, "not-allowed");
            assert_eq!(p.foreground, "var(--color-text-3)");
        }
        // Active background survives the disabled state
        assert_eq!(
            ButtonPresentation::from_flags(true, true).background,
            "var(--color-primary-100)"
        );
    }

    #[test]
    fn test_style_string() {
        let style = ButtonPresentation::from_flags(false, true).style();
        assert_eq!(
            style,
            "--attach-bg: transparent; --attach-fg: var(--color-text-3); --attach-cursor: not-allowed;"
        );
    }

    #[test]
    fn test_style_leaves_hover_to_stylesheet() {
        for (active, disabled) in [(false, false), (true, false), (false, true), (true, true)] {
            let style = ButtonPresentation::from_flags(active, disabled).style();
            for declaration in style.split(';').map(str::trim).filter(|d| !d.is_empty()) {
                assert!(declaration.starts_with("--"), "unexpected declaration: {declaration}");
            }
        }
    }

    #[test]
    fn test_button_class_combines_modifiers() {
        assert_eq!(button_class(false, false), "mini-input-bar__attach");
        assert_eq!(
            button_class(true, true),
            "mini-input-bar__attach mini-input-bar__attach--active mini-input-bar__attach--disabled"
        );
    }

    #[test]
    fn test_dispatch_runs_once_when_enabled() {
        let mut calls = 0;
        assert!(dispatch_select(false, || calls += 1));
        assert_eq!(calls, 1);
        assert!(dispatch_select(false, || calls += 1));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_dispatch_blocked_while_loading() {
        let mut calls = 0;
        assert!(!dispatch_select(true, || calls += 1));
        assert_eq!(calls, 0);
    }
}
