//! Named timer slots
//!
//! Each slot holds at most one pending timer. Scheduling into an occupied
//! slot cancels the timer already there, so repeated requests never stack.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Pending handles keyed by slot name
#[derive(Debug)]
pub struct TimerSlots<H> {
    slots: HashMap<String, H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H> TimerSlots<H> {
    /// Store `handle` under `name`, returning the handle it displaced
    pub fn replace(&mut self, name: &str, handle: H) -> Option<H> {
        self.slots.insert(name.to_string(), handle)
    }

    pub fn take(&mut self, name: &str) -> Option<H> {
        self.slots.remove(name)
    }

    pub fn drain(&mut self) -> Vec<H> {
        self.slots.drain().map(|(_, handle)| handle).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Timer operations returned by [`use_timer`]
#[derive(Clone)]
pub struct UseTimer {
    slots: Rc<RefCell<TimerSlots<Task>>>,
}

impl UseTimer {
    /// Run `f` after `delay_ms`, replacing any timer pending in `name`
    pub fn set_timeout_timer(&self, name: &str, delay_ms: u64, f: impl FnOnce() + 'static) {
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            f();
        });

        let previous = self.slots.borrow_mut().replace(name, task);
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    pub fn clear_timeout_timer(&self, name: &str) {
        let pending = self.slots.borrow_mut().take(name);
        if let Some(task) = pending {
            task.cancel();
        }
    }

    pub fn clear_all_timers(&self) {
        let pending = self.slots.borrow_mut().drain();
        for task in pending {
            task.cancel();
        }
    }
}

/// Hook owning the component's timer slots; every pending timer is
/// cancelled when the component unmounts.
pub fn use_timer() -> UseTimer {
    let slots = use_hook(|| Rc::new(RefCell::new(TimerSlots::default())));
    let timer = UseTimer { slots };

    let timer_for_drop = timer.clone();
    use_drop(move || timer_for_drop.clear_all_timers());

    timer
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
