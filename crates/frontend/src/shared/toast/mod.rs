//! Transient notifications: a FIFO of toasts that fade out and detach on a
//! fixed schedule.
//!
//! [`ToastQueue`] holds the state and [`ToastTiming::schedule`] the steps
//! every toast goes through; [`host`] turns that schedule into browser
//! timers and renders the queue.

pub mod host;

pub use host::{use_toasts, ToastHost, ToastService};

use crate::shared::config::ToastConfig;
use contracts::shared::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub display_ms: u64,
    pub fade_ms: u64,
}

impl ToastTiming {
    /// Time after enqueueing at which the toast is detached.
    pub fn lifetime_ms(&self) -> u64 {
        self.display_ms + self.fade_ms
    }

    /// Delay after enqueueing of each step, in firing order.
    pub fn schedule(&self) -> [(u32, ToastStep); 2] {
        let ms = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        [
            (ms(self.display_ms), ToastStep::Fade),
            (ms(self.lifetime_ms()), ToastStep::Detach),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Fade,
    Detach,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display_ms: 4000,
            fade_ms: 300,
        }
    }
}

impl From<ToastConfig> for ToastTiming {
    fn from(config: ToastConfig) -> Self {
        Self {
            display_ms: u64::from(config.display_ms),
            fade_ms: u64::from(config.fade_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
    pub phase: ToastPhase,
}

impl ToastEntry {
    pub fn css_class(&self) -> String {
        let fade = match self.phase {
            ToastPhase::Visible => "",
            ToastPhase::Fading => " fade-out",
        };
        format!("toast-custom {}{fade}", self.notification.kind.css_class())
    }

    /// Inner markup of the toast. Title and message are escaped.
    pub fn markup(&self) -> String {
        let n = &self.notification;
        format!(
            r#"<div class="toast-icon"><i class="bi bi-{icon}"></i></div><div><strong class="d-block">{title}</strong><small class="text-muted">{message}</small></div>"#,
            icon = n.kind.icon(),
            title = html_escape(&n.title),
            message = html_escape(&n.message),
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Toasts in arrival order. No cap, no deduplication.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    timing: ToastTiming,
    next_id: u64,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            timing,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Append to the end of the queue, stamping the creation time.
    pub fn enqueue(&mut self, mut notification: Notification, now_ms: u64) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        notification.created_at_ms = now_ms;
        self.entries.push(ToastEntry {
            id,
            notification,
            phase: ToastPhase::Visible,
        });
        id
    }

    pub fn begin_fade(&mut self, id: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.phase = ToastPhase::Fading;
        }
    }

    /// Detach a toast. Returns whether it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Apply one scheduled step. Steps for unknown ids are ignored.
    pub fn apply(&mut self, id: u64, step: ToastStep) {
        match step {
            ToastStep::Fade => self.begin_fade(id),
            ToastStep::Detach => {
                self.remove(id);
            }
        }
    }

    pub fn clear(&mut self) -> Vec<u64> {
        self.entries.drain(..).map(|e| e.id).collect()
    }

    pub fn get(&self, id: u64) -> Option<&ToastEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::notification::NotificationKind;

    /// Apply every step of `id` due `elapsed_ms` after it was queued.
    fn run_until(queue: &mut ToastQueue, id: u64, elapsed_ms: u32) {
        for (delay, step) in queue.timing().schedule() {
            if delay <= elapsed_ms {
                queue.apply(id, step);
            }
        }
    }

    #[test]
    fn test_schedule() {
        assert_eq!(
            ToastTiming::default().schedule(),
            [(4000, ToastStep::Fade), (4300, ToastStep::Detach)]
        );
        let timing = ToastTiming {
            display_ms: 1000,
            fade_ms: 0,
        };
        assert_eq!(timing.schedule()[1], (1000, ToastStep::Detach));
    }

    #[test]
    fn test_toast_lifecycle() {
        let phase_at = |elapsed_ms: u32| {
            let mut queue = ToastQueue::new(ToastTiming::default());
            let id = queue.enqueue(Notification::success("Guardado", "Todo bien"), 10_000);
            run_until(&mut queue, id, elapsed_ms);
            queue.get(id).map(|e| e.phase)
        };

        assert_eq!(phase_at(0), Some(ToastPhase::Visible));
        assert_eq!(phase_at(3_999), Some(ToastPhase::Visible));
        assert_eq!(phase_at(4_000), Some(ToastPhase::Fading));
        assert_eq!(phase_at(4_299), Some(ToastPhase::Fading));
        assert_eq!(phase_at(4_300), None);
    }

    #[test]
    fn test_step_for_dismissed_toast_is_ignored() {
        let mut queue = ToastQueue::default();
        let a = queue.enqueue(Notification::info("a", ""), 0);
        let b = queue.enqueue(Notification::info("b", ""), 0);
        queue.remove(a);
        queue.apply(a, ToastStep::Fade);
        queue.apply(a, ToastStep::Detach);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(b).map(|e| e.phase), Some(ToastPhase::Visible));
    }

    #[test]
    fn test_fifo_without_dedup() {
        let mut queue = ToastQueue::new(ToastTiming::default());
        let a = queue.enqueue(Notification::info("Hola", "uno"), 0);
        let b = queue.enqueue(Notification::info("Hola", "uno"), 0);
        let c = queue.enqueue(Notification::error("Fallo", "dos"), 5);
        let ids: Vec<u64> = queue.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_dismiss_and_clear() {
        let mut queue = ToastQueue::new(ToastTiming::default());
        let a = queue.enqueue(Notification::info("a", ""), 0);
        let b = queue.enqueue(Notification::info("b", ""), 0);
        assert!(queue.remove(a));
        assert!(!queue.remove(a));
        assert_eq!(queue.clear(), vec![b]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_markup_escapes_content() {
        let mut queue = ToastQueue::default();
        let id = queue.enqueue(
            Notification::warning("<script>alert(1)</script>", "a & \"b\""),
            0,
        );
        let markup = queue.get(id).unwrap().markup();
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(markup.contains("a &amp; &quot;b&quot;"));
        assert!(markup.contains("bi-exclamation-triangle"));
    }

    #[test]
    fn test_unknown_kind_keeps_class_with_info_icon() {
        let mut queue = ToastQueue::default();
        let id = queue.enqueue(
            Notification::new(NotificationKind::parse("notice"), "t", "m"),
            0,
        );
        let entry = queue.get(id).unwrap();
        assert_eq!(entry.css_class(), "toast-custom notice");
        assert!(entry.markup().contains("bi-info-circle"));

        queue.begin_fade(id);
        assert_eq!(queue.get(id).unwrap().css_class(), "toast-custom notice fade-out");
    }

    #[test]
    fn test_timing_from_config() {
        let timing = ToastTiming::from(ToastConfig::default());
        assert_eq!(timing, ToastTiming::default());
        assert_eq!(timing.lifetime_ms(), 4300);
    }
}
