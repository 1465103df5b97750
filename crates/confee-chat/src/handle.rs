//! A cloneable handle for observing the controller from other tasks.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::{Notify, broadcast};

use crate::events::ChatEvent;

/// A cloneable handle exposing the busy flag.
///
/// All fields are `Arc`-wrapped, so cloning is cheap.
#[derive(Clone)]
pub struct ChatHandle {
    pub(crate) busy: Arc<AtomicBool>,
    pub(crate) idle_notify: Arc<Notify>,
}

impl ChatHandle {
    pub(crate) fn new() -> Self {
        Self {
            busy: Arc::new(AtomicBool::new(false)),
            idle_notify: Arc::new(Notify::new()),
        }
    }

    /// Whether a request is in flight. Render surfaces should not submit
    /// (or reset) while this is `true`.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Wait until no request is in flight.
    pub async fn wait_for_idle(&self) {
        let notified = self.idle_notify.notified();
        if !self.is_busy() {
            return;
        }
        notified.await;
    }

    /// Set the flag. Returns the previous value.
    pub(crate) fn set_busy(&self, busy: bool) -> bool {
        let was = self.busy.swap(busy, Ordering::AcqRel);
        if was && !busy {
            self.idle_notify.notify_waiters();
        }
        was
    }
}

/// Holds the busy flag up for the lifetime of one turn.
///
/// Dropping it clears the flag, so the flag comes down even if the turn's
/// future is dropped while the request is in flight.
pub(crate) struct BusyGuard {
    handle: ChatHandle,
    event_tx: broadcast::Sender<ChatEvent>,
}

impl BusyGuard {
    pub(crate) fn engage(handle: ChatHandle, event_tx: broadcast::Sender<ChatEvent>) -> Self {
        if !handle.set_busy(true) {
            let _ = event_tx.send(ChatEvent::BusyChanged { busy: true });
        }
        Self { handle, event_tx }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if self.handle.set_busy(false) {
            let _ = self.event_tx.send(ChatEvent::BusyChanged { busy: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_guard_raises_and_clears_flag() {
        let handle = ChatHandle::new();
        let (tx, mut rx) = broadcast::channel(8);

        let guard = BusyGuard::engage(handle.clone(), tx);
        assert!(handle.is_busy());
        drop(guard);
        assert!(!handle.is_busy());

        assert!(matches!(rx.try_recv(), Ok(ChatEvent::BusyChanged { busy: true })));
        assert!(matches!(rx.try_recv(), Ok(ChatEvent::BusyChanged { busy: false })));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_wait_for_idle_when_idle_returns_immediately() {
        let handle = ChatHandle::new();
        handle.wait_for_idle().await;
    }

    #[tokio::test]
    async fn test_wait_for_idle_wakes_on_clear() {
        let handle = ChatHandle::new();
        handle.set_busy(true);

        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.wait_for_idle().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.set_busy(false);

        assert!(tokio::time::timeout(Duration::from_secs(5), task).await.is_ok());
    }

    #[tokio::test]
    async fn test_wait_for_idle_blocks_while_busy() {
        let handle = ChatHandle::new();
        handle.set_busy(true);
        assert!(
            tokio::time::timeout(Duration::from_millis(20), handle.wait_for_idle())
                .await
                .is_err()
        );
    }
}
