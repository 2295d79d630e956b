//! Outside-click detection.

use std::sync::Arc;

use log::debug;

use crate::event::PointerEvent;
use crate::layout::Rect;
use crate::pointer::{PointerSource, SubscriptionId};

/// Fires a callback for every pointer press outside a boundary.
///
/// The boundary is read lazily on each press, so it may move or grow (e.g.
/// when a dropdown opens) without resubscribing. A boundary of `None` means
/// the owner has not been laid out yet, and every press counts as outside.
///
/// Dropping the guard unsubscribes; no callback fires afterwards.
pub struct OutsideClick {
    source: Arc<dyn PointerSource>,
    subscription: SubscriptionId,
}

impl OutsideClick {
    pub fn new<B, F>(source: Arc<dyn PointerSource>, boundary: B, on_outside: F) -> Self
    where
        B: Fn() -> Option<Rect> + Send + Sync + 'static,
        F: Fn(&PointerEvent) + Send + Sync + 'static,
    {
        let subscription = source.subscribe(Arc::new(move |event: &PointerEvent| {
            let inside = boundary().is_some_and(|rect| rect.contains(event.x, event.y));
            if !inside {
                on_outside(event);
            }
        }));
        debug!("OutsideClick subscribed as {}", subscription);
        Self {
            source,
            subscription,
        }
    }
}

impl Drop for OutsideClick {
    fn drop(&mut self) {
        debug!("OutsideClick unsubscribing {}", self.subscription);
        self.source.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for OutsideClick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutsideClick")
            .field("subscription", &self.subscription)
            .finish()
    }
}
