//! Per-maker cooldown bookkeeping for the check-in toggle.
//!
//! An entry is recorded at check-in and consulted when the same badge shows
//! up again: check-out is refused until the window has elapsed. This absorbs
//! the vision pipeline re-reporting a badge several times in quick
//! succession, which would otherwise bounce the maker straight back out.
//!
//! State lives in the injected deps, not in a global, so two servers in one
//! process keep separate cooldowns.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

/// Tracks when each maker last checked in.
///
/// Thread-safe, cloneable. Clones share the same entries.
#[derive(Clone, Default)]
pub struct CooldownTracker {
    entries: Arc<RwLock<HashMap<Uuid, Instant>>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a maker just checked in.
    pub async fn record(&self, maker_id: Uuid) {
        self.entries.write().await.insert(maker_id, Instant::now());
    }

    /// Time left before the maker may check out, if the window is still open.
    ///
    /// Returns `None` when no entry exists or the window has elapsed. Expired
    /// entries are left in place; the next check-in overwrites them.
    pub async fn remaining(&self, maker_id: Uuid, window: Duration) -> Option<Duration> {
        let entries = self.entries.read().await;
        let recorded = entries.get(&maker_id)?;
        let elapsed = recorded.elapsed();
        if elapsed < window {
            Some(window - elapsed)
        } else {
            None
        }
    }

    /// Drop a maker's entry after a successful check-out.
    pub async fn clear(&self, maker_id: Uuid) {
        self.entries.write().await.remove(&maker_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_remaining_within_window() {
        let tracker = CooldownTracker::new();
        let maker_id = Uuid::new_v4();
        tracker.record(maker_id).await;

        tokio::time::sleep(Duration::from_secs(4)).await;

        let remaining = tracker
            .remaining(maker_id, Duration::from_secs(10))
            .await
            .expect("window should still be open");
        assert!(remaining <= Duration::from_secs(6));
        assert!(remaining > Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_remaining_after_window_elapsed() {
        let tracker = CooldownTracker::new();
        let maker_id = Uuid::new_v4();
        tracker.record(maker_id).await;

        tokio::time::sleep(Duration::from_secs(11)).await;

        assert!(tracker
            .remaining(maker_id, Duration::from_secs(10))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_unknown_maker_has_no_cooldown() {
        let tracker = CooldownTracker::new();
        assert!(tracker
            .remaining(Uuid::new_v4(), Duration::from_secs(10))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_entry() {
        let tracker = CooldownTracker::new();
        let maker_id = Uuid::new_v4();
        tracker.record(maker_id).await;
        tracker.clear(maker_id).await;

        assert!(tracker
            .remaining(maker_id, Duration::from_secs(10))
            .await
            .is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rerecord_restarts_window() {
        let tracker = CooldownTracker::new();
        let maker_id = Uuid::new_v4();
        tracker.record(maker_id).await;

        tokio::time::sleep(Duration::from_secs(8)).await;
        tracker.record(maker_id).await;
        tokio::time::sleep(Duration::from_secs(8)).await;

        // 16s after the first record, but only 8s after the second
        assert!(tracker
            .remaining(maker_id, Duration::from_secs(10))
            .await
            .is_some());
    }
}
