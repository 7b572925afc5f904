use std::sync::Arc;
use std::time::Duration;

use campus_domain::{Toast, ToastKind};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

/// Delay after which a toast hides itself.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Snapshot of the toast currently owned by a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Last toast shown, kept after hiding so the exit animation has content.
    pub toast: Toast,
    /// Whether the toast is currently displayed.
    pub is_visible: bool,
}

impl ToastState {
    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        self.toast.message.as_str()
    }

    /// Returns the severity.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.toast.kind
    }

    /// Returns the icon class for the severity.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.toast.icon()
    }
}

#[derive(Debug, Default)]
struct ToastSlot {
    state: ToastState,
    generation: u64,
}

/// Screen-scoped toast notifications with auto-hide.
///
/// Every trigger cancels the pending hide and schedules a fresh one, so a
/// toast is always visible for the full delay after its own trigger. A hide
/// timer that survives cancellation still only hides the generation that
/// scheduled it. Dropping the service aborts the pending hide.
pub struct NotificationService {
    slot: Arc<RwLock<ToastSlot>>,
    pending_hide: Mutex<Option<JoinHandle<()>>>,
    hide_after: Duration,
}

impl NotificationService {
    /// Creates a notification service with the given auto-hide delay.
    #[must_use]
    pub fn new(hide_after: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(ToastSlot::default())),
            pending_hide: Mutex::new(None),
            hide_after,
        }
    }

    /// Returns the auto-hide delay.
    #[must_use]
    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Shows a toast and (re)schedules its auto-hide.
    pub async fn show_toast_notification(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind);
        debug!(kind = kind.as_str(), message = %toast.message, "showing toast");

        let mut slot = self.slot.write().await;
        slot.generation = slot.generation.wrapping_add(1);
        slot.state = ToastState {
            toast,
            is_visible: true,
        };
        let generation = slot.generation;

        // Swapped under the slot guard so handles are replaced in generation order.
        let hide_task = tokio::spawn(hide_after_delay(
            Arc::clone(&self.slot),
            self.hide_after,
            generation,
        ));
        if let Some(previous) = self.pending_hide.lock().await.replace(hide_task) {
            previous.abort();
        }
        drop(slot);
    }

    /// Hides the current toast immediately.
    pub async fn hide_toast(&self) {
        self.slot.write().await.state.is_visible = false;
    }

    /// Returns the current toast state.
    pub async fn current(&self) -> ToastState {
        self.slot.read().await.state.clone()
    }

    /// Returns whether a toast is currently displayed.
    pub async fn is_visible(&self) -> bool {
        self.slot.read().await.state.is_visible
    }
}

async fn hide_after_delay(slot: Arc<RwLock<ToastSlot>>, delay: Duration, generation: u64) {
    tokio::time::sleep(delay).await;
    let mut slot = slot.write().await;
    if slot.generation == generation {
        slot.state.is_visible = false;
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Drop for NotificationService {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_hide.get_mut().take() {
            pending.abort();
        }
    }
}
