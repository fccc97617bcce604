//! Input bar for the minimized chat window
//!
//! Renders the assistant's model avatar, a single-line text field and an
//! attachment button. All state is owned by the caller: the bar reads its
//! props and reports keystrokes, pastes, edits and attachment requests back
//! through the handlers, passing event payloads through untouched.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::attachment_button::{AttachmentButton, ButtonPresentation};
use crate::app::components::model_avatar::{avatar_for, ModelAvatar};
use crate::domain::models::{Assistant, FileMetadata, ModelDescriptor};
use crate::shared::config::InputBarConfig;
use crate::shared::constants::{INPUT_BAR_CONTAINER_ID, INPUT_BAR_FIELD_ID};
use crate::shared::hooks::{use_auto_focus, use_focus_handle};
use crate::shared::logging::log_render;

/// Props for InputBar
#[derive(Props, Clone, PartialEq)]
pub struct InputBarProps {
    /// Current field contents, shown verbatim
    pub text: String,
    pub assistant: Assistant,
    /// Shown while `text` is empty
    pub placeholder: String,
    /// Disables the attachment button and suppresses auto-focus
    #[props(default = false)]
    pub loading: bool,
    /// Only the count matters here
    #[props(default)]
    pub files: Vec<FileMetadata>,
    pub on_select_images: EventHandler<()>,
    pub on_key_down: EventHandler<KeyboardEvent>,
    pub on_paste: EventHandler<ClipboardEvent>,
    pub on_change: EventHandler<FormEvent>,
    /// Receives the root container once mounted. Never read by the bar.
    #[props(default)]
    pub container_ref: Option<Signal<Option<Rc<MountedData>>>>,
    #[props(default)]
    pub config: InputBarConfig,
}

/// Render decisions derived from the props
#[derive(Debug, Clone, PartialEq)]
pub struct InputBarView {
    pub avatar: Option<ModelDescriptor>,
    pub avatar_size: u32,
    pub attachment_active: bool,
    pub attachment_disabled: bool,
    pub attachment: ButtonPresentation,
}

impl InputBarView {
    pub fn new(
        assistant: &Assistant,
        loading: bool,
        has_attachment: bool,
        config: &InputBarConfig,
    ) -> Self {
        Self {
            avatar: avatar_for(assistant).cloned(),
            avatar_size: config.avatar_size,
            attachment_active: has_attachment,
            attachment_disabled: loading,
            attachment: ButtonPresentation::from_flags(has_attachment, loading),
        }
    }
}

#[component]
pub fn InputBar(props: InputBarProps) -> Element {
    let mut focus = use_focus_handle();

    // Recomputed only when the number of files changes
    let file_count = props.files.len();
    let attached = use_memo(use_reactive((&file_count,), |(count,)| count > 0));

    use_auto_focus(
        props.loading,
        focus,
        props.config.focus_delay_ms,
        props.config.auto_focus,
    );

    let view = InputBarView::new(&props.assistant, props.loading, attached(), &props.config);
    log_render(props.loading, view.attachment_active, view.avatar.is_some());

    let container_ref = props.container_ref;
    let on_key_down = props.on_key_down;
    let on_paste = props.on_paste;
    let on_change = props.on_change;
    let font_size = props.config.font_size_px;

    rsx! {
        div {
            id: INPUT_BAR_CONTAINER_ID,
            class: "mini-input-bar",
            onmounted: move |evt: MountedEvent| {
                if let Some(mut container) = container_ref {
                    container.set(Some(evt.data()));
                }
            },

            if let Some(model) = view.avatar.clone() {
                ModelAvatar { model, size: view.avatar_size }
            }

            div { class: "mini-input-bar__field",
                input {
                    id: INPUT_BAR_FIELD_ID,
                    class: "mini-input-bar__input",
                    r#type: "text",
                    value: "{props.text}",
                    placeholder: "{props.placeholder}",
                    autofocus: true,
                    style: "font-size: {font_size}px;",
                    onmounted: move |evt: MountedEvent| focus.attach(evt),
                    onkeydown: move |evt: KeyboardEvent| on_key_down.call(evt),
                    onpaste: move |evt: ClipboardEvent| on_paste.call(evt),
                    oninput: move |evt: FormEvent| on_change.call(evt),
                }

                AttachmentButton {
                    active: view.attachment_active,
                    disabled: view.attachment_disabled,
                    tooltip: props.config.attachment_tooltip.clone(),
                    attached: file_count,
                    on_select: props.on_select_images,
                }
            }
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod mounted_tests {
    use std::cell::Cell;

    use dioxus::core::{AttributeValue, Mutation, Mutations, ScopeId, VirtualDom};

    use super::*;
    use crate::shared::logging::capture::LogCapture;

    const FOCUS_SCHEDULED: &str = "Scheduled deferred focus";

    /// Values the host feeds into the bar on its next render
    #[derive(Default, PartialEq)]
    struct HostState {
        loading: Cell<bool>,
        files: Cell<usize>,
        revision: Cell<usize>,
    }

    #[component]
    fn Host(state: Rc<HostState>, auto_focus: bool) -> Element {
        let files: Vec<FileMetadata> = (0..state.files.get())
            .map(|i| FileMetadata::from_name(&format!("{i}.png"), 512))
            .collect();
        let config = InputBarConfig {
            auto_focus,
            ..InputBarConfig::default()
        };

        rsx! {
            InputBar {
                text: format!("draft {}", state.revision.get()),
                assistant: Assistant::new("default", "Default"),
                placeholder: "Ask...".to_string(),
                loading: state.loading.get(),
                files,
                on_select_images: move |_| {},
                on_key_down: move |_| {},
                on_paste: move |_| {},
                on_change: move |_| {},
                config,
            }
        }
    }

    struct Harness {
        dom: VirtualDom,
        state: Rc<HostState>,
    }

    impl Harness {
        fn mount(loading: bool, files: usize, auto_focus: bool) -> (Self, Mutations) {
            let state = Rc::new(HostState::default());
            state.loading.set(loading);
            state.files.set(files);

            let dom = VirtualDom::new_with_props(
                Host,
                HostProps {
                    state: state.clone(),
                    auto_focus,
                },
            );
            let mut harness = Self { dom, state };
            let mut mutations = harness.dom.rebuild_to_vec();
            mutations.edits.extend(harness.settle().edits);
            (harness, mutations)
        }

        /// Run effects and spawned tasks until the tree is quiet
        fn settle(&mut self) -> Mutations {
            let mut mutations = Mutations::default();
            for _ in 0..8 {
                self.dom.process_events();
                self.dom.render_immediate(&mut mutations);
            }
            mutations
        }

        fn rerender(&mut self, update: impl FnOnce(&HostState)) -> Mutations {
            update(&self.state);
            self.state.revision.set(self.state.revision.get() + 1);
            self.dom.mark_dirty(ScopeId::APP);
            self.settle()
        }

        fn set_loading(&mut self, loading: bool) -> Mutations {
            self.rerender(|state| state.loading.set(loading))
        }
    }

    fn attach_classes(mutations: &Mutations) -> Vec<String> {
        mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::SetAttribute {
                    name: "class",
                    value: AttributeValue::Text(value),
                    ..
                } if value.starts_with("mini-input-bar__attach") => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    fn last_disabled(mutations: &Mutations) -> Option<bool> {
        mutations.edits.iter().rev().find_map(|edit| match edit {
            Mutation::SetAttribute {
                name: "disabled",
                value: AttributeValue::Bool(disabled),
                ..
            } => Some(*disabled),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_idle_rerenders_focus_once() {
        let capture = LogCapture::default();
        let _guard = capture.install();

        let (mut harness, _) = Harness::mount(false, 0, true);
        assert_eq!(capture.count(FOCUS_SCHEDULED), 1);

        for _ in 0..3 {
            harness.rerender(|_| {});
        }
        assert_eq!(capture.count(FOCUS_SCHEDULED), 1);
    }

    #[tokio::test]
    async fn test_focus_once_per_return_to_idle() {
        let capture = LogCapture::default();
        let _guard = capture.install();

        let (mut harness, _) = Harness::mount(false, 0, true);
        harness.set_loading(true);
        assert_eq!(capture.count(FOCUS_SCHEDULED), 1);

        harness.set_loading(false);
        harness.set_loading(false);
        assert_eq!(capture.count(FOCUS_SCHEDULED), 2);
    }

    #[tokio::test]
    async fn test_no_focus_while_loading() {
        let capture = LogCapture::default();
        let _guard = capture.install();

        let (mut harness, _) = Harness::mount(true, 0, true);
        harness.rerender(|_| {});
        harness.set_loading(true);

        assert_eq!(capture.count(FOCUS_SCHEDULED), 0);
    }

    #[tokio::test]
    async fn test_auto_focus_disabled_by_config() {
        let capture = LogCapture::default();
        let _guard = capture.install();

        let (mut harness, _) = Harness::mount(false, 0, false);
        harness.set_loading(true);
        harness.set_loading(false);

        assert_eq!(capture.count(FOCUS_SCHEDULED), 0);
    }

    #[tokio::test]
    async fn test_file_count_flips_attachment_state() {
        let (mut harness, mounted) = Harness::mount(false, 0, true);
        assert_eq!(
            attach_classes(&mounted).last().map(String::as_str),
            Some("mini-input-bar__attach")
        );

        let attached = harness.rerender(|state| state.files.set(1));
        assert_eq!(
            attach_classes(&attached).last().map(String::as_str),
            Some("mini-input-bar__attach mini-input-bar__attach--active")
        );

        let cleared = harness.rerender(|state| state.files.set(0));
        assert_eq!(
            attach_classes(&cleared).last().map(String::as_str),
            Some("mini-input-bar__attach")
        );
    }

    #[tokio::test]
    async fn test_loading_disables_attachment_button() {
        let (mut harness, _) = Harness::mount(false, 1, true);

        let loading = harness.set_loading(true);
        assert_eq!(last_disabled(&loading), Some(true));
        assert_eq!(
            attach_classes(&loading).last().map(String::as_str),
            Some("mini-input-bar__attach mini-input-bar__attach--active mini-input-bar__attach--disabled")
        );

        let idle = harness.set_loading(false);
        assert_eq!(last_disabled(&idle), Some(false));
    }
}
