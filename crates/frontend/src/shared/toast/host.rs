use super::{ToastQueue, ToastStep, ToastTiming};
use crate::shared::clock::now_ms;
use crate::shared::icons::bi;
use contracts::shared::notification::Notification;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::collections::HashMap;

/// Toast queue plus the fade/detach timers of every queued toast.
///
/// Dropping a [`Timeout`] cancels it, so removing a toast's handles from
/// `timers` is all `dismiss` and `clear` need to do.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    timers: StoredValue<HashMap<u64, [Timeout; 2]>, LocalStorage>,
}

impl ToastService {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(timing)),
            timers: StoredValue::new_local(HashMap::new()),
        }
    }

    pub fn notify(&self, notification: Notification) -> u64 {
        leptos::logging::log!(
            "toast [{}] {}",
            notification.kind.css_class(),
            notification.title
        );
        let now = now_ms();
        let Some(id) = self.queue.try_update(|q| q.enqueue(notification, now)) else {
            return 0;
        };
        let timing = self.queue.with_untracked(|q| q.timing());

        let this = *self;
        let [fade, detach] = timing.schedule().map(|(delay, step)| {
            Timeout::new(delay, move || {
                this.queue.update(|q| q.apply(id, step));
                if step == ToastStep::Detach {
                    this.timers.update_value(|timers| {
                        timers.remove(&id);
                    });
                }
            })
        });
        self.timers.update_value(|timers| {
            timers.insert(id, [fade, detach]);
        });
        id
    }

    pub fn success(&self, title: &str, message: &str) -> u64 {
        self.notify(Notification::success(title, message))
    }

    pub fn error(&self, title: &str, message: &str) -> u64 {
        self.notify(Notification::error(title, message))
    }

    pub fn warning(&self, title: &str, message: &str) -> u64 {
        self.notify(Notification::warning(title, message))
    }

    pub fn info(&self, title: &str, message: &str) -> u64 {
        self.notify(Notification::info(title, message))
    }

    /// Remove a toast now and cancel its pending timers.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.remove(id);
        });
        self.timers.update_value(|timers| {
            timers.remove(&id);
        });
    }

    /// Drop every toast and cancel all pending timers. Safe to call while
    /// the owning scope is being disposed.
    pub fn clear(&self) {
        self.queue.try_update(|q| {
            q.clear();
        });
        self.timers.try_update_value(|timers| timers.clear());
    }

    pub fn len(&self) -> usize {
        self.queue.with(|q| q.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Fixed container rendering the queue, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue;
    on_cleanup(move || toasts.clear());

    view! {
        <div id="toastContainer" class="toast-container">
            <For
                each=move || queue.with(|q| q.entries().iter().map(|e| e.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| {
                    let class = move || {
                        queue.with(|q| q.get(id).map(|e| e.css_class()).unwrap_or_default())
                    };
                    let markup = queue
                        .with_untracked(|q| q.get(id).map(|e| e.markup()))
                        .unwrap_or_default();
                    view! {
                        <div class=class role="status">
                            <div class="toast-body" inner_html=markup></div>
                            <button
                                class="toast-close"
                                title="Cerrar"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {bi("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_empties_queue() {
        let owner = Owner::new();
        let toasts = owner.with(|| ToastService::new(ToastTiming::default()));
        toasts.queue.update(|q| {
            q.enqueue(Notification::info("a", ""), 0);
            q.enqueue(Notification::info("b", ""), 0);
        });
        assert_eq!(toasts.len(), 2);
        toasts.clear();
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_clear_after_owner_disposed() {
        let owner = Owner::new();
        let toasts = owner.with(|| ToastService::new(ToastTiming::default()));
        owner.cleanup();
        toasts.clear();
    }
}
