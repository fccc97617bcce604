//! Deferred focus on the input bar's text field
//!
//! Focus is requested once each time `loading` settles to false (and on the
//! first render when it starts false). Re-renders that keep `loading` false
//! do not request it again. A pending request is only ever replaced by the
//! next one scheduled into the same slot.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::shared::constants::FOCUS_TIMER_KEY;
use crate::shared::hooks::use_focus::FocusHandle;
use crate::shared::hooks::use_timer::use_timer;
use crate::shared::logging::log_focus_scheduled;

/// Decides when a focus request is due
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutoFocusGate {
    last_loading: Option<bool>,
}

impl AutoFocusGate {
    /// Record the latest `loading` value; true when focus should be scheduled
    pub fn observe(&mut self, loading: bool) -> bool {
        let previous = self.last_loading.replace(loading);
        !loading && previous != Some(false)
    }
}

pub fn use_auto_focus(loading: bool, handle: FocusHandle, delay_ms: u64, enabled: bool) {
    let timer = use_timer();
    let gate = use_hook(|| Rc::new(RefCell::new(AutoFocusGate::default())));

    use_effect(use_reactive((&loading,), move |(loading,)| {
        let due = gate.borrow_mut().observe(loading);
        if !due || !enabled {
            return;
        }

        log_focus_scheduled(FOCUS_TIMER_KEY, delay_ms);
        timer.set_timeout_timer(FOCUS_TIMER_KEY, delay_ms, move || handle.request_focus());
    }));
}
