//! Event publishing/subscription abstraction (mechanics only).
//!
//! Each subscription gets a copy of every event published after it was
//! created (broadcast semantics). Delivery is in publish order for a single
//! publisher; the bus stores nothing, so late subscribers only see new events.

use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = store.subscribe();
/// store.add_item();
/// while let Ok(changed) = subscription.try_recv() {
///     redraw(&changed.snapshot);
/// }
/// ```
///
/// Subscriptions are designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Publish/subscribe abstraction.
///
/// `publish()` can fail (e.g. a poisoned lock); the caller decides whether a
/// failed notification matters. State changes are committed before publishing,
/// so a failed publish never loses state.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
