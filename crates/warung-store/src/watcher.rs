//! # Store Poller
//!
//! Detects out-of-band changes to the blob store, so a second process
//! (or a second window onto the same data directory) sees updates made
//! by the first.
//!
//! There is no cross-process notification channel for plain files, so
//! this polls: every interval it fingerprints the collections and bumps
//! a version on a watch channel when the fingerprint moves. Subscribers
//! reload whatever they display.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

use crate::blob::BlobStore;

/// Polls the blob store for changes.
#[derive(Clone)]
pub struct StorePoller {
    blob: Arc<dyn BlobStore>,
    interval: Duration,
}

impl StorePoller {
    /// Creates a poller over `blob`, checking every `interval`.
    pub fn new(blob: Arc<dyn BlobStore>, interval: Duration) -> Self {
        StorePoller { blob, interval }
    }

    /// Spawns the polling task and returns the change channel.
    ///
    /// The receiver carries a version counter: it starts at 0 and is bumped
    /// once per detected change. The task stops when every receiver is
    /// dropped.
    pub fn spawn(self) -> watch::Receiver<u64> {
        let (tx, rx) = watch::channel(0u64);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last = self.blob.fingerprint().ok();
            let mut version = 0u64;
            loop {
                ticker.tick().await;
                let current = match self.blob.fingerprint() {
                    Ok(fp) => Some(fp),
                    Err(err) => {
                        // Unreadable blob this tick; keep polling.
                        warn!(error = %err, "Fingerprint failed");
                        None
                    }
                };
                if current.is_some() && current != last {
                    last = current;
                    version += 1;
                    debug!(version, "Store change detected");
                    if tx.send(version).is_err() {
                        break;
                    }
                } else {
                    trace!("Store unchanged");
                    if tx.is_closed() {
                        break;
                    }
                }
            }
        });
        rx
    }
}

impl std::fmt::Debug for StorePoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorePoller")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::{save_collection, MemoryStore, SALES_KEY};
    use warung_core::Sale;

    #[tokio::test]
    async fn test_poller_reports_changes() {
        let blob: Arc<dyn BlobStore> = Arc::new(MemoryStore::new());
        let poller = StorePoller::new(Arc::clone(&blob), Duration::from_millis(10));
        let mut rx = poller.spawn();
        assert_eq!(*rx.borrow(), 0);

        // Let the task take its baseline fingerprint first.
        tokio::time::sleep(Duration::from_millis(30)).await;
        save_collection::<Sale>(blob.as_ref(), SALES_KEY, &[]).unwrap();

        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("change within timeout")
            .expect("sender alive");
        assert!(*rx.borrow() >= 1);
    }

    #[tokio::test]
    async fn test_poller_is_quiet_without_changes() {
        let blob: Arc<dyn BlobStore> = Arc::new(MemoryStore::new());
        let poller = StorePoller::new(Arc::clone(&blob), Duration::from_millis(10));
        let mut rx = poller.spawn();

        let waited = tokio::time::timeout(Duration::from_millis(80), rx.changed()).await;
        assert!(waited.is_err(), "no change expected");
        assert_eq!(*rx.borrow(), 0);
    }
}
