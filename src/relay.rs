//! Message queue between chat requests and the processor connection.
//!
//! DESIGN
//! ======
//! Chat handlers enqueue a `PendingChat` carrying a oneshot reply channel.
//! The single processor WebSocket drains the queue through a
//! `ProcessorLease`, which owns the queue receiver for as long as the socket
//! lives. A second processor blocks on the lease until the first one leaves.
//!
//! A requester that gives up (timeout, client disconnect) drops its reply
//! receiver; the processor skips such entries instead of forwarding them.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, OwnedMutexGuard, mpsc, oneshot};
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::error::RelayError;

// =============================================================================
// PENDING CHAT
// =============================================================================

/// One chat message waiting for the processor.
#[derive(Debug)]
pub struct PendingChat {
    pub id: Uuid,
    /// Client address as reported by the proxy headers, if any.
    pub source: Option<String>,
    pub content: String,
    pub received_at: Instant,
    reply_tx: oneshot::Sender<String>,
}

impl PendingChat {
    /// Create a pending message and the receiver its reply will arrive on.
    #[must_use]
    pub fn new(content: String, source: Option<String>) -> (Self, oneshot::Receiver<String>) {
        let (reply_tx, reply_rx) = oneshot::channel();
        let pending = Self { id: Uuid::new_v4(), source, content, received_at: Instant::now(), reply_tx };
        (pending, reply_rx)
    }

    /// Whether the requester stopped waiting.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.reply_tx.is_closed()
    }

    /// Deliver the processor's reply. Returns `false` if nobody is waiting.
    pub fn answer(self, reply: String) -> bool {
        self.reply_tx.send(reply).is_ok()
    }
}

// =============================================================================
// RELAY
// =============================================================================

/// Shared queue handle. Cheap to clone.
#[derive(Clone)]
pub struct Relay {
    tx: mpsc::Sender<PendingChat>,
    rx: Arc<Mutex<mpsc::Receiver<PendingChat>>>,
    connected: Arc<AtomicBool>,
}

impl Relay {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self { tx, rx: Arc::new(Mutex::new(rx)), connected: Arc::new(AtomicBool::new(false)) }
    }

    /// Whether a processor currently holds the queue.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Enqueue `pending`, waiting for room when the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ProcessorGone`] if the queue has been closed.
    pub async fn enqueue(&self, pending: PendingChat) -> Result<(), RelayError> {
        self.tx.send(pending).await.map_err(|_| RelayError::ProcessorGone)
    }

    /// Acquire exclusive access to the queue for one processor connection.
    pub async fn lease(&self) -> ProcessorLease {
        let rx = Arc::clone(&self.rx).lock_owned().await;
        self.connected.store(true, Ordering::Release);
        ProcessorLease { rx, connected: Arc::clone(&self.connected) }
    }
}

// =============================================================================
// PROCESSOR LEASE
// =============================================================================

/// Exclusive receiver side of the queue, held by the connected processor.
/// Dropping the lease marks the relay as disconnected.
pub struct ProcessorLease {
    rx: OwnedMutexGuard<mpsc::Receiver<PendingChat>>,
    connected: Arc<AtomicBool>,
}

impl ProcessorLease {
    /// Next message whose requester is still waiting.
    ///
    /// Cancel-safe: dropping the future never loses a queued message.
    pub async fn next(&mut self) -> Option<PendingChat> {
        loop {
            let pending = self.rx.recv().await?;
            if pending.is_abandoned() {
                debug!(id = %pending.id, "relay: skipping abandoned message");
                continue;
            }
            return Some(pending);
        }
    }
}

impl Drop for ProcessorLease {
    fn drop(&mut self) {
        self.connected.store(false, Ordering::Release);
    }
}
