use dioxus::prelude::*;

use crate::domain::models::{Assistant, ModelDescriptor};
use crate::shared::constants::AVATAR_SIZE;

/// Model to draw an avatar for, if the assistant has one
pub fn avatar_for(assistant: &Assistant) -> Option<&ModelDescriptor> {
    assistant.model.as_ref()
}

fn initial_font_size(size: u32) -> u32 {
    (size.saturating_mul(2) / 5).max(8)
}

/// Round avatar showing the model's initial
#[component]
pub fn ModelAvatar(model: ModelDescriptor, #[props(default = AVATAR_SIZE)] size: u32) -> Element {
    let initial = model.initial();
    let font_size = initial_font_size(size);

    rsx! {
        div {
            class: "model-avatar",
            title: "{model.name}",
            "data-model": "{model.id}",
            "data-size": "{size}",
            style: "width: {size}px; height: {size}px; font-size: {font_size}px;",
            "{initial}"
        }
    }
}
