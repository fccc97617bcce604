use std::rc::Rc;

use dioxus::prelude::*;

use crate::shared::logging::{log_focus_applied, log_focus_failed};

/// Focus-capable handle on a mounted element.
///
/// The element registers itself through `onmounted`; callers only ever see
/// `focus()` and never the underlying node.
#[derive(Clone, Copy, PartialEq)]
pub struct FocusHandle {
    mounted: Signal<Option<Rc<MountedData>>>,
}

impl FocusHandle {
    /// Record the element from its `onmounted` event
    pub fn attach(&mut self, evt: MountedEvent) {
        self.mounted.set(Some(evt.data()));
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.peek().is_some()
    }

    /// Move keyboard focus into the element. Best-effort: failures are logged.
    pub async fn focus(&self) {
        let mounted = (*self.mounted.peek()).clone();
        let Some(element) = mounted else {
            log_focus_failed("element not mounted");
            return;
        };

        match element.set_focus(true).await {
            Ok(()) => log_focus_applied(),
            Err(e) => log_focus_failed(&format!("{:?}", e)),
        }
    }

    /// Fire-and-forget variant of [`FocusHandle::focus`]
    pub fn request_focus(&self) {
        let handle = *self;
        spawn(async move {
            handle.focus().await;
        });
    }
}

pub fn use_focus_handle() -> FocusHandle {
    let mounted = use_signal(|| None::<Rc<MountedData>>);
    FocusHandle { mounted }
}
