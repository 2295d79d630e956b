//! Global pointer-event subscriptions.
//!
//! Widgets that care about presses anywhere on screen (not just inside their
//! own bounds) subscribe to a [`PointerSource`]. The host owns the source and
//! feeds it every pointer press; [`PointerHub`] is the in-process
//! implementation used by the demo and by tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{trace, warn};

use crate::event::PointerEvent;

/// Callback invoked for every pointer press.
pub type PointerListener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

/// Handle returned by [`PointerSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__pointer_sub_{}", self.0)
    }
}

/// Capability to subscribe to and unsubscribe from global pointer presses.
pub trait PointerSource: Send + Sync {
    fn subscribe(&self, listener: PointerListener) -> SubscriptionId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// In-memory pointer source.
///
/// Cloning yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct PointerHub {
    listeners: Arc<RwLock<Vec<(SubscriptionId, PointerListener)>>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Deliver a press to every listener subscribed at the time of the call.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe (themselves included) while being called.
    pub fn dispatch(&self, event: &PointerEvent) {
        let snapshot: Vec<PointerListener> = match self.listeners.read() {
            Ok(guard) => guard.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => {
                warn!("PointerHub listener lock poisoned, dropping {:?}", event);
                return;
            }
        };

        trace!(
            "PointerHub::dispatch ({}, {}) to {} listeners",
            event.x,
            event.y,
            snapshot.len()
        );

        for listener in snapshot {
            listener(event);
        }
    }
}

impl PointerSource for PointerHub {
    fn subscribe(&self, listener: PointerListener) -> SubscriptionId {
        let id = SubscriptionId::new();
        if let Ok(mut guard) = self.listeners.write() {
            guard.push((id, listener));
        }
        trace!("PointerHub::subscribe {}", id);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut guard) = self.listeners.write() {
            guard.retain(|(existing, _)| *existing != id);
        }
        trace!("PointerHub::unsubscribe {}", id);
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
