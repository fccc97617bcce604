//! Home page of the minimized chat window
//!
//! Owns the draft text, attachments and loading flag, and drives the
//! InputBar through its handlers.

use dioxus::prelude::*;
use keyboard_types::Modifiers;

use crate::app::components::InputBar;
use crate::domain::models::{has_attachment, Assistant, FileMetadata, MessageDraft};
use crate::shared::config::InputBarConfig;
use crate::shared::constants::SEND_SETTLE_MS;
use crate::shared::hooks::sleep_ms;

#[cfg(target_arch = "wasm32")]
use crate::domain::models::SUPPORTED_IMAGE_TYPES;

/// Open the browser file chooser and append picked images (WASM only)
#[cfg(target_arch = "wasm32")]
fn open_image_picker(mut files: Signal<Vec<FileMetadata>>) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("input") else {
        return;
    };
    let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
        return;
    };

    input.set_type("file");
    input.set_multiple(true);
    input.set_accept(&SUPPORTED_IMAGE_TYPES.join(","));

    let picker = input.clone();
    let on_change = Closure::wrap(Box::new(move || {
        let Some(list) = picker.files() else {
            return;
        };
        for i in 0..list.length() {
            if let Some(file) = list.get(i) {
                let metadata = FileMetadata::from_name(&file.name(), file.size() as u64);
                tracing::debug!("Attached {} ({} bytes)", metadata.name, metadata.size);
                files.write().push(metadata);
            }
        }
    }) as Box<dyn FnMut()>);

    input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
    on_change.forget(); // Keep closure alive until the picker fires

    input.click();
}

#[cfg(not(target_arch = "wasm32"))]
fn open_image_picker(_files: Signal<Vec<FileMetadata>>) {
    tracing::warn!("Image picker is only available in the browser build");
}

fn placeholder_for(assistant: &Assistant, loading: bool) -> String {
    if loading {
        "Waiting for reply...".to_string()
    } else {
        format!("Ask {}... (Enter to send)", assistant.name)
    }
}

#[component]
pub fn MiniHome(assistant: Assistant, on_send: EventHandler<MessageDraft>) -> Element {
    let mut text = use_signal(String::new);
    let mut files = use_signal(Vec::<FileMetadata>::new);
    let mut loading = use_signal(|| false);
    let config = try_use_context::<InputBarConfig>().unwrap_or_default();

    // Text and attachments are cleared as soon as the draft is handed off;
    // `loading` stays raised until the reply settles.
    let mut send = move || {
        if loading() {
            return;
        }
        let Some(draft) = MessageDraft::take_from(&mut text.write(), &mut files.write()) else {
            return;
        };

        loading.set(true);
        on_send.call(draft);

        spawn(async move {
            sleep_ms(SEND_SETTLE_MS).await;
            loading.set(false);
        });
    };

    let handle_key_down = move |evt: KeyboardEvent| {
        if evt.is_composing() {
            return;
        }
        match evt.key() {
            Key::Enter if !evt.modifiers().contains(Modifiers::SHIFT) => {
                evt.prevent_default();
                send();
            }
            Key::Escape if has_attachment(&files.read()) => {
                files.write().clear();
            }
            _ => {}
        }
    };

    let handle_paste = move |_evt: ClipboardEvent| {
        tracing::debug!("Paste into mini window input");
    };

    let handle_change = move |evt: FormEvent| {
        text.set(evt.value());
    };

    let placeholder = placeholder_for(&assistant, loading());

    rsx! {
        div { class: "mini-home",
            InputBar {
                text: text(),
                assistant: assistant.clone(),
                placeholder,
                loading: loading(),
                files: files(),
                on_select_images: move |_| open_image_picker(files),
                on_key_down: handle_key_down,
                on_paste: handle_paste,
                on_change: handle_change,
                config,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_names_assistant() {
        let assistant = Assistant::new("default", "Cherry");
        assert_eq!(placeholder_for(&assistant, false), "Ask Cherry... (Enter to send)");
        assert_eq!(placeholder_for(&assistant, true), "Waiting for reply...");
    }
}
