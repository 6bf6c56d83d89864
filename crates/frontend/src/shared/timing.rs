//! Debounce on top of browser timers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Runs only the last call made within `delay_ms` of quiet.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new_local(None),
        }
    }

    /// Schedule `f`, replacing (and cancelling) any call still pending.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        self.pending.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}
