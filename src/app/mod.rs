pub mod components;
pub mod pages;

use dioxus::prelude::*;

use crate::domain::models::{Assistant, MessageDraft, ModelDescriptor};
use pages::MiniHome;

fn default_assistant() -> Assistant {
    Assistant::new("default", "Default Assistant").with_model(ModelDescriptor::new(
        "gpt-4o-mini",
        "GPT-4o mini",
        "openai",
    ))
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_effect(|| {
        tracing::info!("Mini window initialized");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        MiniHome {
            assistant: default_assistant(),
            on_send: move |draft: MessageDraft| {
                tracing::info!(
                    text_len = draft.text.len(),
                    attachments = draft.files.len(),
                    "Message submitted from mini window"
                );
            },
        }
    }
}
