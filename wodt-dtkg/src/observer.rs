//! Change notification for the knowledge graph
//!
//! Subscribers receive the full canonical serialization after every committed
//! mutation. Delivery is best-effort: a failing subscriber is logged and the
//! remaining subscribers are still notified.

use crate::error::{DtkgError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Receives the new graph text after each commit
pub trait DtkgObserver: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str {
        "observer"
    }

    fn notify_new_dtkg(&self, dtkg: &str) -> Result<()>;
}

/// Ordered list of subscribers
#[derive(Default)]
pub struct ObserverSet {
    observers: RwLock<Vec<Arc<dyn DtkgObserver>>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; notifications follow registration order
    pub fn add(&self, observer: Arc<dyn DtkgObserver>) {
        self.observers.write().push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Deliver `dtkg` to every subscriber
    ///
    /// Returns the number of subscribers that accepted it.
    pub fn notify(&self, dtkg: &str) -> usize {
        // Snapshot so a slow subscriber never holds the list lock
        let observers: Vec<Arc<dyn DtkgObserver>> = self.observers.read().clone();
        let mut delivered = 0;
        for observer in &observers {
            match observer.notify_new_dtkg(dtkg) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!(observer = observer.name(), error = %e, "subscriber notification failed");
                }
            }
        }
        delivered
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.len())
            .finish()
    }
}

/// Subscriber that forwards each notification into a broadcast channel
///
/// A push transport subscribes once per connected socket.
#[derive(Debug, Clone)]
pub struct BroadcastObserver {
    sender: broadcast::Sender<Arc<str>>,
}

impl BroadcastObserver {
    /// Create a channel-backed subscriber holding up to `capacity` pending
    /// notifications per receiver
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Open a new receiver; it sees notifications sent after this call
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<str>> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl DtkgObserver for BroadcastObserver {
    fn name(&self) -> &str {
        "broadcast"
    }

    fn notify_new_dtkg(&self, dtkg: &str) -> Result<()> {
        self.sender
            .send(Arc::from(dtkg))
            .map(|_| ())
            .map_err(|_| DtkgError::notify("no active receivers"))
    }
}
