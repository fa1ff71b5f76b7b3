//! Toast notifications raised by the intake form.
//!
//! Toasts are fire-and-forget. Nothing the form does depends on how (or
//! whether) they are shown.

use std::sync::Mutex;
use std::time::Duration;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    /// Auto-dismiss delay
    pub duration: Duration,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            duration: TOAST_DURATION,
        }
    }
}

/// Presentation seam for toasts.
pub trait Notifier {
    fn notify(&self, toast: &Toast);
}

/// Discards every toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _toast: &Toast) {}
}

/// Keeps toasts until a front end drains them.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        match self.toasts.lock() {
            Ok(mut toasts) => std::mem::take(&mut *toasts),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, toast: &Toast) {
        match self.toasts.lock() {
            Ok(mut toasts) => toasts.push(toast.clone()),
            Err(poisoned) => poisoned.into_inner().push(toast.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_toast_defaults() {
        let toast = Toast::success("Saved");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_collecting_notifier_drains() {
        let notifier = CollectingNotifier::new();
        notifier.notify(&Toast::success("one"));
        notifier.notify(&Toast::success("two"));

        let titles: Vec<_> = notifier.drain().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["one", "two"]);
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_noop_notifier() {
        NoopNotifier.notify(&Toast::success("ignored"));
    }
}
