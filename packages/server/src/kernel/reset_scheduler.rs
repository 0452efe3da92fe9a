//! Keyed one-shot timers for violation recovery.
//!
//! Each key holds at most one pending task: re-arming replaces (and aborts)
//! the previous one, so only the latest violation's timer can fire. Fired
//! tasks run on the runtime and outlive the request that armed them.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Keyed delayed tasks.
///
/// Thread-safe, cloneable. Clones share the same pending set.
#[derive(Clone, Default)]
pub struct ResetScheduler {
    pending: Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>,
}

impl ResetScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay`, replacing any timer already
    /// armed for this key. The replaced timer is aborted and never fires.
    pub async fn arm<F>(&self, key: Uuid, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });

        if let Some(previous) = self.pending.lock().await.insert(key, handle) {
            previous.abort();
        }
    }

    /// Abort the pending timer for a key, if any.
    pub async fn cancel(&self, key: Uuid) {
        if let Some(handle) = self.pending.lock().await.remove(&key) {
            handle.abort();
        }
    }

    /// Number of keys holding a timer slot. Fired timers keep their slot
    /// until re-armed or cancelled, so the map stays roster-sized.
    pub async fn armed_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
